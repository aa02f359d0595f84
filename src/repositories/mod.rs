pub mod json_store;
pub mod question_repository;
pub mod user_repository;

pub use json_store::JsonStore;
pub use question_repository::{JsonQuestionRepository, QuestionRepository};
pub use user_repository::{JsonUserRepository, UserRepository};

#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
