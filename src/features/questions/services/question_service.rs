use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::{
    CreateAnswerDto, CreateQuestionDto, QuestionResponseDto, UpdateQuestionDto,
};
use crate::features::questions::models::{Answer, QuestionWithCategory};
use crate::shared::types::PaginationQuery;

/// Service for question and answer catalog operations
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List questions newest first, with category names and answers.
    /// Returns (questions, total_count).
    pub async fn list(&self, query: &PaginationQuery) -> Result<(Vec<QuestionResponseDto>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let questions = sqlx::query_as::<_, QuestionWithCategory>(
            r#"
            SELECT q.id, q.category_id, c.name AS category_name,
                   q.question_text, q.marks, q.created_at
            FROM questions q
            JOIN categories c ON c.id = q.category_id
            ORDER BY q.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Database(e)
        })?;

        let ids: Vec<Uuid> = questions.iter().map(|q| q.id).collect();
        let mut answers_by_question = self.load_answers(&ids).await?;

        let questions = questions
            .into_iter()
            .map(|q| {
                let answers = answers_by_question.remove(&q.id).unwrap_or_default();
                QuestionResponseDto::from_parts(q, answers)
            })
            .collect();

        Ok((questions, total))
    }

    /// Get a question with its answers by id
    pub async fn get(&self, id: Uuid) -> Result<QuestionResponseDto> {
        let question = sqlx::query_as::<_, QuestionWithCategory>(
            r#"
            SELECT q.id, q.category_id, c.name AS category_name,
                   q.question_text, q.marks, q.created_at
            FROM questions q
            JOIN categories c ON c.id = q.category_id
            WHERE q.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get question: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))?;

        let mut answers_by_question = self.load_answers(&[id]).await?;
        let answers = answers_by_question.remove(&id).unwrap_or_default();

        Ok(QuestionResponseDto::from_parts(question, answers))
    }

    /// Create a question together with its answer choices (one transaction)
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<QuestionResponseDto> {
        self.ensure_category_exists(dto.category_id).await?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let question_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO questions (category_id, question_text, marks)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(dto.category_id)
        .bind(&dto.question_text)
        .bind(dto.marks)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create question: {:?}", e);
            AppError::Database(e)
        })?;

        Self::insert_answers(&mut tx, question_id, &dto.answers).await?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Question created: id={}, category_id={}",
            question_id,
            dto.category_id
        );

        self.get(question_id).await
    }

    /// Update a question and replace its answer set wholesale
    pub async fn update(&self, id: Uuid, dto: UpdateQuestionDto) -> Result<QuestionResponseDto> {
        self.ensure_category_exists(dto.category_id).await?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE questions
            SET category_id = $2, question_text = $3, marks = $4
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(dto.category_id)
        .bind(&dto.question_text)
        .bind(dto.marks)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update question: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.is_none() {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        sqlx::query("DELETE FROM answers WHERE question_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        Self::insert_answers(&mut tx, id, &dto.answers).await?;

        tx.commit().await.map_err(AppError::Database)?;

        self.get(id).await
    }

    /// Delete a question; its answers cascade away
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        tracing::info!("Question deleted: id={}", id);
        Ok(())
    }

    async fn ensure_category_exists(&self, category_id: Uuid) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)",
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Category {} not found",
                category_id
            )));
        }
        Ok(())
    }

    async fn insert_answers(
        tx: &mut Transaction<'_, Postgres>,
        question_id: Uuid,
        answers: &[CreateAnswerDto],
    ) -> Result<()> {
        for answer in answers {
            sqlx::query(
                r#"
                INSERT INTO answers (question_id, answer_text, is_correct)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(question_id)
            .bind(&answer.answer_text)
            .bind(answer.is_correct)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert answer: {:?}", e);
                AppError::Database(e)
            })?;
        }
        Ok(())
    }

    async fn load_answers(&self, question_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Answer>>> {
        if question_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, question_id, answer_text, is_correct
            FROM answers
            WHERE question_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(question_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load answers: {:?}", e);
            AppError::Database(e)
        })?;

        let mut by_question: HashMap<Uuid, Vec<Answer>> = HashMap::new();
        for answer in answers {
            by_question.entry(answer.question_id).or_default().push(answer);
        }
        Ok(by_question)
    }
}
