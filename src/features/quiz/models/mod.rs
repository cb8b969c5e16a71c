mod quiz_session;

pub use quiz_session::QuizSessionRow;
