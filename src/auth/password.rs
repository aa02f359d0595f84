use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Salted Argon2 hash in PHC string form. Runs on the blocking pool.
pub async fn hash_password(password: SecretString) -> AppResult<String> {
    tokio::task::spawn_blocking(move || {
        let salt = Uuid::new_v4();
        argon2::hash_encoded(
            password.expose_secret().as_bytes(),
            salt.as_bytes(),
            &argon2::Config::default(),
        )
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    })
    .await?
}

pub async fn verify_password(encoded: String, password: SecretString) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || {
        argon2::verify_encoded(&encoded, password.expose_secret().as_bytes()).map_err(|e| {
            log::error!("stored password hash unreadable: {}", e);
            AppError::Internal("Stored password hash is invalid".to_string())
        })
    })
    .await?
}
