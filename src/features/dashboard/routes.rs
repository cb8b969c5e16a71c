use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Host dashboard routes, nested under `/api/host`
pub fn host_routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::get_summary))
        .with_state(service)
}
