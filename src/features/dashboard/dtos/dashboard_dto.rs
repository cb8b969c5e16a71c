use serde::Serialize;
use utoipa::ToSchema;

/// Catalog counts shown on the host landing page.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total_categories: i64,
    pub total_questions: i64,
    pub total_answers: i64,
}
