use std::path::PathBuf;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{errors::AppResult, models::domain::Question, repositories::json_store::JsonStore};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// `None` if no question has ever been stored.
    async fn find_all(&self) -> AppResult<Option<Vec<Question>>>;
    /// Returns the collection size after the append.
    async fn append(&self, question: Question) -> AppResult<usize>;
}

pub struct JsonQuestionRepository {
    store: JsonStore<Question>,
}

impl JsonQuestionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }
}

#[async_trait]
impl QuestionRepository for JsonQuestionRepository {
    async fn find_all(&self) -> AppResult<Option<Vec<Question>>> {
        self.store.load().await
    }

    async fn append(&self, question: Question) -> AppResult<usize> {
        self.store
            .update(move |questions| {
                questions.push(question);
                Ok(questions.len())
            })
            .await
    }
}
