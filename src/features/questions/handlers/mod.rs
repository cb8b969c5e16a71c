pub mod question_handler;

pub use question_handler::{
    __path_create_question, __path_delete_question, __path_get_question, __path_list_questions,
    __path_update_question, create_question, delete_question, get_question, list_questions,
    update_question,
};
