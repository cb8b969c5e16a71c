use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::quiz::dtos::{QuizResultDto, QuizStateDto, SubmitAnswerDto};
use crate::features::quiz::services::QuizService;
use crate::shared::types::ApiResponse;

/// Start or resume a quiz for a category and fetch the current question
#[utoipa::path(
    get,
    path = "/api/quiz/{category_id}",
    params(
        ("category_id" = Uuid, Path, description = "Category to quiz on")
    ),
    responses(
        (status = 200, description = "Current quiz state", body = ApiResponse<QuizStateDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "quiz",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_quiz(
    user: AuthenticatedUser,
    State(service): State<Arc<QuizService>>,
    Path(category_id): Path<Uuid>,
) -> Result<Json<ApiResponse<QuizStateDto>>> {
    let state = service.current_state(&user.account_id, category_id).await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Submit an answer for the current question and advance
#[utoipa::path(
    post,
    path = "/api/quiz/{category_id}",
    params(
        ("category_id" = Uuid, Path, description = "Category being quizzed on")
    ),
    request_body = SubmitAnswerDto,
    responses(
        (status = 200, description = "Advanced quiz state", body = ApiResponse<QuizStateDto>),
        (status = 400, description = "Answer does not belong to the current question"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category or answer not found")
    ),
    tag = "quiz",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn submit_answer(
    user: AuthenticatedUser,
    State(service): State<Arc<QuizService>>,
    Path(category_id): Path<Uuid>,
    AppJson(dto): AppJson<SubmitAnswerDto>,
) -> Result<Json<ApiResponse<QuizStateDto>>> {
    let state = service
        .submit_answer(&user.account_id, category_id, dto.answer_id)
        .await?;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Fetch the final score for a category and clear the attempt
#[utoipa::path(
    get,
    path = "/api/results/{category_id}",
    params(
        ("category_id" = Uuid, Path, description = "Category the quiz was taken on")
    ),
    responses(
        (status = 200, description = "Final score snapshot", body = ApiResponse<QuizResultDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "quiz",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_results(
    user: AuthenticatedUser,
    State(service): State<Arc<QuizService>>,
    Path(category_id): Path<Uuid>,
) -> Result<Json<ApiResponse<QuizResultDto>>> {
    let result = service
        .finalize_and_clear(&user.account_id, category_id)
        .await?;
    Ok(Json(ApiResponse::success(Some(result), None, None)))
}
