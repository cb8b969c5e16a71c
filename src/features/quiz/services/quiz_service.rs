use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::{Answer, Question};
use crate::features::quiz::dtos::{QuizQuestionDto, QuizResultDto, QuizStateDto};
use crate::features::quiz::engine::{AnswerGrade, QuizAttempt, ScoreSummary};
use crate::features::quiz::models::QuizSessionRow;

/// Orchestrates the quiz engine against persistent session rows.
///
/// One `quiz_sessions` row per account holds the active attempt; starting
/// a quiz for a different category overwrites it, finishing one deletes it.
pub struct QuizService {
    pool: PgPool,
}

impl QuizService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Current quiz state for the account, starting a fresh shuffled
    /// attempt if none exists for this category.
    pub async fn current_state(&self, account_id: &str, category_id: Uuid) -> Result<QuizStateDto> {
        self.ensure_category(category_id).await?;
        let attempt = self.start_or_resume(account_id, category_id).await?;
        self.state_dto(&attempt).await
    }

    /// Record an answer for the current question and advance.
    ///
    /// A missing `answer_id` earns nothing; a present one must belong to
    /// the question currently shown. Submitting against a completed
    /// attempt returns the completed state unchanged.
    pub async fn submit_answer(
        &self,
        account_id: &str,
        category_id: Uuid,
        answer_id: Option<Uuid>,
    ) -> Result<QuizStateDto> {
        self.ensure_category(category_id).await?;
        let mut attempt = self.start_or_resume(account_id, category_id).await?;

        let Some(current_question_id) = attempt.current_question_id() else {
            return self.state_dto(&attempt).await;
        };

        let earned = match answer_id {
            None => 0,
            Some(answer_id) => {
                let answer = sqlx::query_as::<_, Answer>(
                    "SELECT id, question_id, answer_text, is_correct FROM answers WHERE id = $1",
                )
                .bind(answer_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?
                .ok_or_else(|| AppError::NotFound(format!("Answer {} not found", answer_id)))?;

                let marks = self.question_marks(current_question_id).await?;

                match attempt.grade_answer(answer.question_id, answer.is_correct, marks) {
                    AnswerGrade::Earned(earned) => earned,
                    AnswerGrade::WrongQuestion => {
                        return Err(AppError::Validation(
                            "Selected answer does not belong to the current question".to_string(),
                        ));
                    }
                }
            }
        };

        attempt.record_answer(earned);
        self.save_attempt(account_id, &attempt).await?;

        self.state_dto(&attempt).await
    }

    /// Snapshot the final score and clear the stored attempt.
    ///
    /// The snapshot reflects whatever attempt is stored for the account,
    /// and the row is always cleared; the category path only provides the
    /// echo in the response. An account with no attempt gets the zero
    /// snapshot; nothing here is an error apart from an unknown category.
    pub async fn finalize_and_clear(
        &self,
        account_id: &str,
        category_id: Uuid,
    ) -> Result<QuizResultDto> {
        let category_name = self.ensure_category(category_id).await?;

        let summary = match self.load_row(account_id).await? {
            Some(row) => {
                let summary = row.into_attempt().summary();

                sqlx::query("DELETE FROM quiz_sessions WHERE account_id = $1")
                    .bind(account_id)
                    .execute(&self.pool)
                    .await
                    .map_err(AppError::Database)?;

                tracing::info!(
                    "Quiz finalized: account_id={}, category_id={}, score={}/{}",
                    account_id,
                    category_id,
                    summary.score,
                    summary.total_questions
                );

                summary
            }
            None => ScoreSummary::zero(),
        };

        Ok(QuizResultDto::from_summary(category_name, summary))
    }

    /// Load the stored attempt, or start a fresh one when there is none
    /// for this category. Switching categories discards the old attempt.
    async fn start_or_resume(&self, account_id: &str, category_id: Uuid) -> Result<QuizAttempt> {
        if let Some(row) = self.load_row(account_id).await? {
            let attempt = row.into_attempt();
            if attempt.resumes(category_id) {
                return Ok(attempt);
            }
        }

        let question_ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM questions WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load question ids: {:?}", e);
            AppError::Database(e)
        })?;

        let attempt = QuizAttempt::start(category_id, question_ids, &mut rand::thread_rng());
        self.save_attempt(account_id, &attempt).await?;

        tracing::info!(
            "Quiz started: account_id={}, category_id={}, questions={}",
            account_id,
            category_id,
            attempt.total_questions()
        );

        Ok(attempt)
    }

    async fn state_dto(&self, attempt: &QuizAttempt) -> Result<QuizStateDto> {
        let question = match attempt.current_question_id() {
            None => None,
            Some(question_id) => Some(self.load_question(question_id).await?),
        };
        Ok(QuizStateDto::from_attempt(attempt, question))
    }

    async fn load_question(&self, question_id: Uuid) -> Result<QuizQuestionDto> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, category_id, question_text, marks, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", question_id)))?;

        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, question_id, answer_text, is_correct
            FROM answers
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(QuizQuestionDto::from_parts(question, answers))
    }

    async fn question_marks(&self, question_id: Uuid) -> Result<i32> {
        sqlx::query_scalar::<_, i32>("SELECT marks FROM questions WHERE id = $1")
            .bind(question_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", question_id)))
    }

    async fn load_row(&self, account_id: &str) -> Result<Option<QuizSessionRow>> {
        sqlx::query_as::<_, QuizSessionRow>(
            r#"
            SELECT account_id, category_id, question_ids, position, score, updated_at
            FROM quiz_sessions
            WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load quiz session: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn save_attempt(&self, account_id: &str, attempt: &QuizAttempt) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO quiz_sessions (account_id, category_id, question_ids, position, score, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (account_id) DO UPDATE
            SET category_id = EXCLUDED.category_id,
                question_ids = EXCLUDED.question_ids,
                position = EXCLUDED.position,
                score = EXCLUDED.score,
                updated_at = NOW()
            "#,
        )
        .bind(account_id)
        .bind(attempt.category_id)
        .bind(&attempt.question_ids)
        .bind(attempt.position as i32)
        .bind(attempt.score)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save quiz session: {:?}", e);
            AppError::Database(e)
        })?;
        Ok(())
    }

    async fn ensure_category(&self, category_id: Uuid) -> Result<String> {
        sqlx::query_scalar::<_, String>("SELECT name FROM categories WHERE id = $1")
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))
    }
}
