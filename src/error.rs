//! Error type shared by the sample routes and the role guard.
//!
//! Every failure leaves the service as `{"code": "...", "message": "..."}`.
//! Clients match on `code`; the message is for humans.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Stable, machine-readable error codes.
pub mod error_code {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const COLLABORATOR_FAILURE: &str = "COLLABORATOR_FAILURE";
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed request parameter. HTTP 400.
    #[error("{0}")]
    InvalidInput(String),

    /// Caller lacks the role the route requires. HTTP 403.
    #[error("{0}")]
    Forbidden(String),

    /// Database or business service failed. HTTP 500.
    #[error("{0}")]
    Collaborator(#[from] anyhow::Error),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => error_code::INVALID_INPUT,
            AppError::Forbidden(_) => error_code::FORBIDDEN,
            AppError::Collaborator(_) => error_code::COLLABORATOR_FAILURE,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Collaborator(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Extractor rejections are client errors and leave as `INVALID_INPUT`
// instead of axum's plain-text bodies.

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(
            AppError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Collaborator(anyhow::anyhow!("x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn collaborator_message_is_passed_through() {
        let err = AppError::from(anyhow::anyhow!("relation \"sampletable1\" does not exist"));
        assert_eq!(err.error_code(), "COLLABORATOR_FAILURE");
        assert_eq!(err.to_string(), "relation \"sampletable1\" does not exist");
    }

    #[tokio::test]
    async fn response_body_carries_code_and_message() {
        let resp = AppError::InvalidInput("InvalidParameter".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INVALID_INPUT");
        assert_eq!(body["message"], "InvalidParameter");
    }
}
