pub mod quiz_handler;

pub use quiz_handler::{
    __path_get_quiz, __path_get_results, __path_submit_answer, get_quiz, get_results,
    submit_answer,
};
