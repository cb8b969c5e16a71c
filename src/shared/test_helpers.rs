#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use crate::shared::constants::{ROLE_HOST, ROLE_PLAYER};

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_host_user() -> AuthenticatedUser {
    AuthenticatedUser {
        account_id: "test-host-account".to_string(),
        email: Some("host@example.com".to_string()),
        roles: vec![ROLE_HOST.to_string()],
    }
}

#[cfg(test)]
pub fn create_player_user() -> AuthenticatedUser {
    AuthenticatedUser {
        account_id: "test-player-account".to_string(),
        email: Some("player@example.com".to_string()),
        roles: vec![ROLE_PLAYER.to_string()],
    }
}

#[cfg(test)]
async fn inject_host_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_host_user());
    next.run(request).await
}

#[cfg(test)]
async fn inject_player_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_player_user());
    next.run(request).await
}

#[cfg(test)]
pub fn with_host_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_host_middleware))
}

#[cfg(test)]
pub fn with_player_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_player_middleware))
}
