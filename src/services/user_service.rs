use std::sync::Arc;

use crate::{
    auth::password::{hash_password, verify_password},
    errors::{AppError, AppResult},
    models::{domain::User, dto::request::Credentials},
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    admin_username: String,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, admin_username: &str) -> Self {
        Self {
            repository,
            admin_username: admin_username.to_string(),
        }
    }

    pub async fn register(&self, credentials: Credentials) -> AppResult<User> {
        let Credentials { username, password } = credentials;

        // Cheap pre-check so a duplicate doesn't pay for a hash; the store
        // re-checks under its write lock.
        if self.repository.find_by_username(&username).await?.is_some() {
            log::info!("rejecting registration of existing user {}", username);
            return Err(AppError::DuplicateUser);
        }

        let password_hash = hash_password(password).await?;
        let user = self
            .repository
            .create(User::new(&username, password_hash, &self.admin_username))
            .await?;

        log::info!("registered {} as {:?}", user.username, user.role);
        Ok(user)
    }

    pub async fn authenticate(&self, credentials: Credentials) -> AppResult<User> {
        let Credentials { username, password } = credentials;

        let Some(user) = self.repository.find_by_username(&username).await? else {
            log::info!("login for unknown user {}", username);
            return Err(AppError::InvalidCredentials);
        };

        if !verify_password(user.password_hash.clone(), password).await? {
            log::info!("wrong password for user {}", username);
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}
