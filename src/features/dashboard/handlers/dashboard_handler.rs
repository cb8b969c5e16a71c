use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::auth::guards::RequireHost;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Catalog counts for the host landing page
#[utoipa::path(
    get,
    path = "/api/host/dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Host access required")
    ),
    tag = "host",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_summary(
    RequireHost(_user): RequireHost,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>> {
    let summary = service.get_summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
