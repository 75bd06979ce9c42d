//! Domain models for the sample application.
//!
//! `Sampletable1` maps to the one table in the sample database. The request
//! and response models describe the shapes the sample routes accept and
//! return.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Database Models (sqlx::FromRow)
// ============================================================================

/// A row of the `sampletable1` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Sampletable1 {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// ============================================================================
// Request Models
// ============================================================================

/// Query string of `GET /sample/hello/query`.
#[derive(Debug, Deserialize)]
pub struct HelloQuery {
    pub name: Option<String>,
}

/// Query string of `GET /sample/hello/number/{foo}`.
///
/// `blah` is kept as raw text so the route can reject non-integers with its
/// own error instead of the extractor's rejection.
#[derive(Debug, Deserialize)]
pub struct NumberQuery {
    pub bar: Option<String>,
    pub blah: Option<String>,
}

// ============================================================================
// Response Models
// ============================================================================

/// Response of `GET /sample`. Keys missing from the config are left out.
#[derive(Debug, Serialize)]
pub struct SampleConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hello: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foo: Option<Value>,
}

/// Response of `GET /sample/hello`.
#[derive(Debug, Serialize)]
pub struct HelloMessage {
    pub message: String,
}

/// Response of `GET /sample/hello/number/{foo}`.
#[derive(Debug, Serialize)]
pub struct NumberResponse {
    pub foo: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<String>,
    pub blah: i64,
}
