//! Role-based access guard.
//!
//! A restricted route declares the [`Role`] it needs when it is registered:
//!
//! ```ignore
//! .route(
//!     "/sample/admin",
//!     get(admin).route_layer(middleware::from_fn_with_state(Role::Admin, require_role)),
//! )
//! ```
//!
//! [`require_role`] asks the configured [`AccessGuard`] before the handler
//! runs. Caller roles travel in the `x-roles` header as a comma-separated list.

use std::fmt;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum::Extension;
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

pub const ROLES_HEADER: &str = "x-roles";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether a request may reach a route that requires `required`.
pub trait AccessGuard: Send + Sync {
    fn check(&self, required: Role, headers: &HeaderMap) -> Result<(), AppError>;
}

/// Grants access when the `x-roles` header lists the required role.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderRoleGuard;

impl AccessGuard for HeaderRoleGuard {
    fn check(&self, required: Role, headers: &HeaderMap) -> Result<(), AppError> {
        if caller_roles(headers).any(|role| role == required.as_str()) {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!("role '{}' required", required)))
        }
    }
}

/// Roles listed across every `x-roles` header value. Blank entries are skipped.
pub fn caller_roles(headers: &HeaderMap) -> impl Iterator<Item = &str> + '_ {
    headers
        .get_all(ROLES_HEADER)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|role| !role.is_empty())
}

/// Route middleware enforcing the role carried as its state.
pub async fn require_role(
    State(role): State<Role>,
    Extension(state): Extension<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Err(err) = state.guard.check(role, req.headers()) {
        warn!("Denied {} {}: {}", req.method(), req.uri().path(), err);
        return Err(err);
    }
    Ok(next.run(req).await)
}
