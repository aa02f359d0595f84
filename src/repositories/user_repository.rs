use std::path::PathBuf;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::User,
    repositories::json_store::JsonStore,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with [`AppError::DuplicateUser`] if the username is taken.
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
}

pub struct JsonUserRepository {
    store: JsonStore<User>,
}

impl JsonUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        self.store
            .update(move |users| {
                if users.iter().any(|u| u.username == user.username) {
                    return Err(AppError::DuplicateUser);
                }

                users.push(user.clone());
                Ok(user)
            })
            .await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.find_all().await?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.store.load().await?.unwrap_or_default())
    }
}
