use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::questions::models::{Answer, QuestionWithCategory};

fn default_marks() -> i32 {
    1
}

/// An answer choice submitted together with its question
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnswerDto {
    #[validate(length(min = 1, max = 255, message = "Answer text must be 1-255 characters"))]
    pub answer_text: String,

    #[serde(default)]
    pub is_correct: bool,
}

/// A non-empty answer set must mark exactly one choice as correct; an empty
/// set stays legal (a draft question without choices yet).
fn validate_single_correct(answers: &[CreateAnswerDto]) -> Result<(), ValidationError> {
    if answers.is_empty() {
        return Ok(());
    }

    match answers.iter().filter(|a| a.is_correct).count() {
        1 => Ok(()),
        _ => {
            let mut error = ValidationError::new("single_correct_answer");
            error.message = Some("Exactly one answer must be flagged correct".into());
            Err(error)
        }
    }
}

/// Request DTO for creating a question with its answer choices
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionDto {
    pub category_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Question text must be 1-255 characters"))]
    pub question_text: String,

    /// Points awarded for a correct answer
    #[serde(default = "default_marks")]
    #[validate(range(min = 1, max = 100, message = "Marks must be 1-100"))]
    pub marks: i32,

    #[serde(default)]
    #[validate(nested, custom(function = validate_single_correct))]
    pub answers: Vec<CreateAnswerDto>,
}

/// Request DTO for updating a question; the answer set is replaced wholesale
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionDto {
    pub category_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Question text must be 1-255 characters"))]
    pub question_text: String,

    #[serde(default = "default_marks")]
    #[validate(range(min = 1, max = 100, message = "Marks must be 1-100"))]
    pub marks: i32,

    #[serde(default)]
    #[validate(nested, custom(function = validate_single_correct))]
    pub answers: Vec<CreateAnswerDto>,
}

/// Response DTO for an answer choice (host view, includes the correctness flag)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponseDto {
    pub id: Uuid,
    pub answer_text: String,
    pub is_correct: bool,
}

impl From<Answer> for AnswerResponseDto {
    fn from(a: Answer) -> Self {
        Self {
            id: a.id,
            answer_text: a.answer_text,
            is_correct: a.is_correct,
        }
    }
}

/// Response DTO for a question with its answer choices
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponseDto {
    pub id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub question_text: String,
    pub marks: i32,
    pub created_at: DateTime<Utc>,
    pub answers: Vec<AnswerResponseDto>,
}

impl QuestionResponseDto {
    pub fn from_parts(question: QuestionWithCategory, answers: Vec<Answer>) -> Self {
        Self {
            id: question.id,
            category_id: question.category_id,
            category_name: question.category_name,
            question_text: question.question_text,
            marks: question.marks,
            created_at: question.created_at,
            answers: answers.into_iter().map(|a| a.into()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(text: &str, is_correct: bool) -> CreateAnswerDto {
        CreateAnswerDto {
            answer_text: text.to_string(),
            is_correct,
        }
    }

    fn question(answers: Vec<CreateAnswerDto>) -> CreateQuestionDto {
        CreateQuestionDto {
            category_id: Uuid::new_v4(),
            question_text: "What is the sample rate of CD audio?".to_string(),
            marks: 1,
            answers,
        }
    }

    #[test]
    fn accepts_single_correct_answer() {
        let dto = question(vec![
            answer("44.1 kHz", true),
            answer("48 kHz", false),
            answer("96 kHz", false),
        ]);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn accepts_empty_answer_set() {
        let dto = question(vec![]);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_no_correct_answer() {
        let dto = question(vec![answer("44.1 kHz", false), answer("48 kHz", false)]);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_multiple_correct_answers() {
        let dto = question(vec![answer("44.1 kHz", true), answer("48 kHz", true)]);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_blank_answer_text() {
        let dto = question(vec![answer("", true)]);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_marks() {
        let mut dto = question(vec![answer("44.1 kHz", true)]);
        dto.marks = 0;
        assert!(dto.validate().is_err());
    }
}
