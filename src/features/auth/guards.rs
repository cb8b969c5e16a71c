//! Role-based authorization guards.
//!
//! Quiz taking is open to any authenticated user; catalog management
//! (categories, questions, answers) requires the "host" role.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking if user is a host.
///
/// Only allows users with the "host" role.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireHost(user): RequireHost) { ... }
/// ```
pub struct RequireHost(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireHost
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_host() {
            return Err(AppError::Forbidden("Host access required".to_string()));
        }

        Ok(RequireHost(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{with_host_auth, with_player_auth};
    use axum::http::StatusCode;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    async fn host_only(RequireHost(user): RequireHost) -> String {
        user.account_id
    }

    fn app() -> Router {
        Router::new().route("/host-only", get(host_only))
    }

    #[tokio::test]
    async fn host_role_is_admitted() {
        let server = TestServer::new(with_host_auth(app())).unwrap();
        let response = server.get("/host-only").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn player_role_is_forbidden() {
        let server = TestServer::new(with_player_auth(app())).unwrap();
        let response = server.get("/host-only").await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unauthenticated_request_is_unauthorized() {
        let server = TestServer::new(app()).unwrap();
        let response = server.get("/host-only").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
