pub mod question_service;
pub mod user_service;

pub use question_service::QuestionService;
pub use user_service::UserService;
