mod quiz_dto;

pub use quiz_dto::{
    QuizAnswerOptionDto, QuizQuestionDto, QuizResultDto, QuizStateDto, SubmitAnswerDto,
};
