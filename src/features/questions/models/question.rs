use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for question
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: Uuid,
    pub category_id: Uuid,
    pub question_text: String,
    pub marks: i32,
    pub created_at: DateTime<Utc>,
}

/// Question row joined with its category name (for host listings)
#[derive(Debug, Clone, FromRow)]
pub struct QuestionWithCategory {
    pub id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub question_text: String,
    pub marks: i32,
    pub created_at: DateTime<Utc>,
}

/// Database model for answer choice
#[derive(Debug, Clone, FromRow)]
pub struct Answer {
    pub id: Uuid,
    pub question_id: Uuid,
    pub answer_text: String,
    pub is_correct: bool,
}
