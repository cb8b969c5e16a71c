use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::questions::models::{Answer, Question};
use crate::features::quiz::engine::{QuizAttempt, ScoreSummary};

/// Answer choice as shown to a player. The correctness flag is
/// deliberately absent from this shape.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswerOptionDto {
    pub id: Uuid,
    pub answer_text: String,
}

impl From<Answer> for QuizAnswerOptionDto {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id,
            answer_text: answer.answer_text,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionDto {
    pub id: Uuid,
    pub question_text: String,
    pub marks: i32,
    pub answers: Vec<QuizAnswerOptionDto>,
}

impl QuizQuestionDto {
    pub fn from_parts(question: Question, answers: Vec<Answer>) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text,
            marks: question.marks,
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Progress snapshot returned after every quiz interaction.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizStateDto {
    pub category_id: Uuid,
    pub question_number: i32,
    pub total_questions: i32,
    pub completed: bool,
    pub question: Option<QuizQuestionDto>,
}

impl QuizStateDto {
    pub fn from_attempt(attempt: &QuizAttempt, question: Option<QuizQuestionDto>) -> Self {
        Self {
            category_id: attempt.category_id,
            question_number: attempt.question_number() as i32,
            total_questions: attempt.total_questions() as i32,
            completed: attempt.is_complete(),
            question,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerDto {
    /// Absent means "no answer selected" and earns no marks.
    pub answer_id: Option<Uuid>,
}

/// Final score snapshot, including the values the results ring needs.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultDto {
    pub category: String,
    pub score: i32,
    pub total_questions: i32,
    pub percentage: i64,
    pub stroke_dasharray: f64,
}

impl QuizResultDto {
    pub fn from_summary(category: String, summary: ScoreSummary) -> Self {
        Self {
            category,
            score: summary.score,
            total_questions: summary.total_questions,
            percentage: summary.percentage,
            stroke_dasharray: summary.stroke_dasharray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_option_never_serializes_correctness() {
        let dto = QuizAnswerOptionDto {
            id: Uuid::new_v4(),
            answer_text: "440 Hz".to_string(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("isCorrect").is_none());
        assert!(json.get("is_correct").is_none());
        assert_eq!(json["answerText"], "440 Hz");
    }

    #[test]
    fn submit_answer_accepts_missing_answer_id() {
        let dto: SubmitAnswerDto = serde_json::from_str("{}").unwrap();
        assert!(dto.answer_id.is_none());

        let dto: SubmitAnswerDto = serde_json::from_str(r#"{"answerId":null}"#).unwrap();
        assert!(dto.answer_id.is_none());
    }

    #[test]
    fn result_dto_carries_summary_values() {
        let summary = ScoreSummary::from_score(10, 20);
        let dto = QuizResultDto::from_summary("Audio Engineering".to_string(), summary);
        assert_eq!(dto.percentage, 50);
        assert_eq!(dto.score, 10);
        assert_eq!(dto.total_questions, 20);
    }
}
