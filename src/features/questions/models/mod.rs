mod question;

pub use question::{Answer, Question, QuestionWithCategory};
