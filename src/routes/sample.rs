//! Sample routes.
//!
//! GET  /sample                     - Config values `hello` and `foo`
//! GET  /sample/hello               - Echo the original request URI
//! GET  /sample/hello/query?name=   - Echo a required query parameter
//! GET  /sample/hello/param/{name}  - Echo a path segment
//! GET  /sample/hello/number/{foo}  - Integer coercion of path and query values
//! POST /sample/hello/body          - Echo a JSON body
//! GET  /sample/database            - Rows from the database service
//! GET  /sample/foobars             - Rows from the foobar service
//! GET  /sample/admin               - Admin-only route

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{OriginalUri, Path, Query};
use axum::http::{header, HeaderMap};
use axum::middleware;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::Value;
use tracing::{error, info};

use crate::error::AppError;
use crate::guard::{require_role, Role};
use crate::models::{
    HelloMessage, HelloQuery, NumberQuery, NumberResponse, SampleConfigResponse, Sampletable1,
};
use crate::state::AppState;

/// Build the sample router.
pub fn router() -> Router {
    Router::new()
        .route("/sample", get(sample))
        .route("/sample/hello", get(hello))
        .route("/sample/hello/query", get(hello_query))
        .route("/sample/hello/param/{name}", get(hello_param))
        .route("/sample/hello/number/{foo}", get(hello_number))
        .route("/sample/hello/body", post(hello_body))
        .route("/sample/database", get(database))
        .route("/sample/foobars", get(foobars))
        .route(
            "/sample/admin",
            get(admin).route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
        )
}

async fn sample(Extension(state): Extension<AppState>) -> Json<SampleConfigResponse> {
    info!("this is sample");

    Json(SampleConfigResponse {
        hello: state.config.get("hello"),
        foo: state.config.get("foo"),
    })
}

/// The message is the URI as the client sent it, including the mount
/// prefix and query string.
async fn hello(OriginalUri(uri): OriginalUri) -> Json<HelloMessage> {
    let message = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    Json(HelloMessage { message })
}

async fn hello_query(
    query: Result<Query<HelloQuery>, QueryRejection>,
) -> Result<String, AppError> {
    let Query(query) = query?;
    let name = query
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::InvalidInput("InvalidParameter".to_string()))?;

    Ok(format!("helloQuery: {}", name))
}

async fn hello_param(name: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    let Path(name) = name?;
    Ok(format!("helloParam: {}", name))
}

async fn hello_number(
    foo: Result<Path<String>, PathRejection>,
    query: Result<Query<NumberQuery>, QueryRejection>,
) -> Result<Json<NumberResponse>, AppError> {
    let Path(foo) = foo?;
    let Query(query) = query?;
    let foo = parse_int("foo", Some(&foo))?;
    let blah = parse_int("blah", query.blah.as_deref())?;

    Ok(Json(NumberResponse {
        foo,
        bar: query.bar,
        blah,
    }))
}

/// No schema is enforced on the payload. A missing body, or one sent without
/// a JSON content type, echoes as `{}`; only malformed JSON is rejected.
async fn hello_body(headers: HeaderMap, body: Bytes) -> Result<String, AppError> {
    let payload = if body.iter().all(u8::is_ascii_whitespace) || !is_json_content_type(&headers) {
        Value::Object(Default::default())
    } else {
        let Json(payload) = Json::<Value>::from_bytes(&body)?;
        payload
    };
    let serialized = serde_json::to_string(&normalize_numbers(payload))
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    Ok(format!("helloBody: {}", serialized))
}

async fn database(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Sampletable1>>, AppError> {
    let rows = state.db.sample1().await.map_err(|e| {
        error!("Failed to query sampletable1: {:#}", e);
        AppError::Collaborator(e)
    })?;

    Ok(Json(rows))
}

async fn foobars(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Sampletable1>>, AppError> {
    let rows = state.foobars.get_foobars().await.map_err(|e| {
        error!("Failed to load foobars: {:#}", e);
        AppError::Collaborator(e)
    })?;

    Ok(Json(rows))
}

/// Only reached once `require_role` has admitted the caller.
async fn admin() -> &'static str {
    "Need admin role"
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Write integral floats (`1.0`, `1e2`) as integers, the way JavaScript
/// prints numbers. Floats outside the i64 range are left alone.
fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) if !n.is_i64() && !n.is_u64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Value::from(f as i64)
            }
            _ => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, normalize_numbers(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Coerce a textual parameter to a base-10 integer: an optional `-` followed
/// by ASCII digits.
fn parse_int(name: &str, raw: Option<&str>) -> Result<i64, AppError> {
    let raw = raw.ok_or_else(|| AppError::InvalidInput(format!("{} is required", name)))?;
    let invalid =
        || AppError::InvalidInput(format!("{} must be an integer, got '{}'", name, raw));

    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<i64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_accepts_base_10() {
        assert_eq!(parse_int("foo", Some("123")).unwrap(), 123);
        assert_eq!(parse_int("foo", Some("-7")).unwrap(), -7);
    }

    #[test]
    fn parse_int_rejects_non_integers() {
        for raw in ["abc", "", "-", "+5", " 5", "1.5", "12abc", "0x10", "99999999999999999999"] {
            let err = parse_int("foo", Some(raw)).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidInput(_)),
                "expected InvalidInput for {:?}",
                raw
            );
        }
    }

    #[test]
    fn integral_floats_print_as_integers() {
        let payload: Value =
            serde_json::from_str(r#"{"a":1.0,"b":1e2,"c":[2.0,1.5],"d":{"e":-0.0},"f":7}"#)
                .unwrap();
        let serialized = serde_json::to_string(&normalize_numbers(payload)).unwrap();
        assert_eq!(serialized, r#"{"a":1,"b":100,"c":[2,1.5],"d":{"e":0},"f":7}"#);
    }

    #[test]
    fn json_content_types() {
        let mut headers = HeaderMap::new();
        assert!(!is_json_content_type(&headers));

        for (value, expected) in [
            ("application/json", true),
            ("application/json; charset=utf-8", true),
            ("Application/JSON", true),
            ("application/merge-patch+json", true),
            ("text/plain", false),
            ("application/x-www-form-urlencoded", false),
        ] {
            headers.insert(header::CONTENT_TYPE, value.parse().unwrap());
            assert_eq!(is_json_content_type(&headers), expected, "{}", value);
        }
    }

    #[test]
    fn parse_int_requires_a_value() {
        let err = parse_int("blah", None).unwrap_err();
        assert_eq!(err.to_string(), "blah is required");
    }
}
