use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category row joined with its question count (for listings)
#[derive(Debug, Clone, FromRow)]
pub struct CategoryWithCount {
    pub id: Uuid,
    pub name: String,
    pub question_count: i64,
    pub created_at: DateTime<Utc>,
}
