use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Host-only question management routes, nested under `/api/host`
pub fn host_routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route(
            "/questions/{id}",
            get(handlers::get_question)
                .put(handlers::update_question)
                .delete(handlers::delete_question),
        )
        .with_state(service)
}
