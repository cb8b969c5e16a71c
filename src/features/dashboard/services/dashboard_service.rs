use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::DashboardSummaryDto;

/// Service for host dashboard queries
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Catalog counts for the host landing page
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let (total_categories, total_questions, total_answers) =
            sqlx::query_as::<_, (i64, i64, i64)>(
                r#"
                SELECT
                    (SELECT COUNT(*) FROM categories),
                    (SELECT COUNT(*) FROM questions),
                    (SELECT COUNT(*) FROM answers)
                "#,
            )
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get dashboard counts: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(DashboardSummaryDto {
            total_categories,
            total_questions,
            total_answers,
        })
    }
}
