pub mod question_dto;

pub use question_dto::{
    AnswerResponseDto, CreateAnswerDto, CreateQuestionDto, QuestionResponseDto, UpdateQuestionDto,
};
