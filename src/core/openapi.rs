use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quiz::{dtos as quiz_dtos, handlers as quiz_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::get_me,
        auth::handlers::logout,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::host_list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Questions (host)
        questions_handlers::list_questions,
        questions_handlers::get_question,
        questions_handlers::create_question,
        questions_handlers::update_question,
        questions_handlers::delete_question,
        // Quiz play
        quiz_handlers::get_quiz,
        quiz_handlers::submit_answer,
        quiz_handlers::get_results,
        // Host dashboard
        dashboard_handlers::get_summary,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::dtos::RegisterRequestDto,
            auth::dtos::LoginRequestDto,
            auth::dtos::AuthResponseDto,
            auth::dtos::AuthUserDto,
            auth::dtos::MeResponseDto,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::dtos::MeResponseDto>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Questions
            questions_dtos::CreateAnswerDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::UpdateQuestionDto,
            questions_dtos::AnswerResponseDto,
            questions_dtos::QuestionResponseDto,
            ApiResponse<Vec<questions_dtos::QuestionResponseDto>>,
            ApiResponse<questions_dtos::QuestionResponseDto>,
            // Quiz play
            quiz_dtos::QuizAnswerOptionDto,
            quiz_dtos::QuizQuestionDto,
            quiz_dtos::QuizStateDto,
            quiz_dtos::SubmitAnswerDto,
            quiz_dtos::QuizResultDto,
            ApiResponse<quiz_dtos::QuizStateDto>,
            ApiResponse<quiz_dtos::QuizResultDto>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and session endpoints"),
        (name = "categories", description = "Quiz category browsing"),
        (name = "quiz", description = "Quiz play and results"),
        (name = "host", description = "Host-only catalog management and dashboard"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Quizbase API",
        version = "0.1.0",
        description = "API documentation for Quizbase",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
