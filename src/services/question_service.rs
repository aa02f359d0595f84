use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
    repositories::QuestionRepository,
};

pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_questions(&self) -> AppResult<Vec<Question>> {
        self.repository
            .find_all()
            .await?
            .ok_or_else(|| AppError::NotFound("No questions found!".to_string()))
    }

    pub async fn add_question(&self, question: Question, added_by: &str) -> AppResult<()> {
        let count = self.repository.append(question).await?;
        log::info!("{} added a question, {} stored", added_by, count);
        Ok(())
    }
}
