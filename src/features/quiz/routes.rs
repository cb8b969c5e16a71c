use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::quiz::handlers;
use crate::features::quiz::services::QuizService;

/// Player-facing quiz routes (token required, any role)
pub fn routes(service: Arc<QuizService>) -> Router {
    Router::new()
        .route(
            "/api/quiz/{category_id}",
            get(handlers::get_quiz).post(handlers::submit_answer),
        )
        .route("/api/results/{category_id}", get(handlers::get_results))
        .with_state(service)
}
