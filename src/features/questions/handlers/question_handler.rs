use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireHost;
use crate::features::questions::dtos::{
    CreateQuestionDto, QuestionResponseDto, UpdateQuestionDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List questions, newest first (paginated)
#[utoipa::path(
    get,
    path = "/api/host/questions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of questions", body = ApiResponse<Vec<QuestionResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Host access required")
    ),
    tag = "host",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_questions(
    RequireHost(_user): RequireHost,
    State(service): State<Arc<QuestionService>>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<QuestionResponseDto>>>> {
    let (questions, total) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(
        Some(questions),
        None,
        Some(Meta { total }),
    )))
}

/// Get a question with its answer choices
#[utoipa::path(
    get,
    path = "/api/host/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question found", body = ApiResponse<QuestionResponseDto>),
        (status = 403, description = "Host access required"),
        (status = 404, description = "Question not found")
    ),
    tag = "host",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_question(
    RequireHost(_user): RequireHost,
    State(service): State<Arc<QuestionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<QuestionResponseDto>>> {
    let question = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(question), None, None)))
}

/// Create a question together with its answer choices
#[utoipa::path(
    post,
    path = "/api/host/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 201, description = "Question created", body = ApiResponse<QuestionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Host access required"),
        (status = 404, description = "Category not found")
    ),
    tag = "host",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_question(
    RequireHost(_user): RequireHost,
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<(StatusCode, Json<ApiResponse<QuestionResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let question = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(question), None, None)),
    ))
}

/// Update a question and replace its answer set
#[utoipa::path(
    put,
    path = "/api/host/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question id")
    ),
    request_body = UpdateQuestionDto,
    responses(
        (status = 200, description = "Question updated", body = ApiResponse<QuestionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Host access required"),
        (status = 404, description = "Question or category not found")
    ),
    tag = "host",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_question(
    RequireHost(_user): RequireHost,
    State(service): State<Arc<QuestionService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateQuestionDto>,
) -> Result<Json<ApiResponse<QuestionResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let question = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(question), None, None)))
}

/// Delete a question and, by cascade, its answers
#[utoipa::path(
    delete,
    path = "/api/host/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 403, description = "Host access required"),
        (status = 404, description = "Question not found")
    ),
    tag = "host",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_question(
    RequireHost(_user): RequireHost,
    State(service): State<Arc<QuestionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Question deleted".to_string()),
        None,
    )))
}
