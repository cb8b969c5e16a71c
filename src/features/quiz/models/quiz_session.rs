use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::quiz::engine::QuizAttempt;

/// Persisted quiz attempt, one row per account.
#[derive(Debug, Clone, FromRow)]
pub struct QuizSessionRow {
    #[allow(dead_code)]
    pub account_id: String,
    pub category_id: Uuid,
    pub question_ids: Vec<Uuid>,
    pub position: i32,
    pub score: i32,
    #[allow(dead_code)]
    pub updated_at: DateTime<Utc>,
}

impl QuizSessionRow {
    pub fn into_attempt(self) -> QuizAttempt {
        QuizAttempt {
            category_id: self.category_id,
            question_ids: self.question_ids,
            position: self.position.max(0) as usize,
            score: self.score,
        }
    }
}
