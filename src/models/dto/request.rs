use secrecy::SecretString;
use serde::Deserialize;
use validator::Validate;

/// Body of `/register` and `/login`, either JSON or url-encoded.
#[derive(Clone, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl CredentialsRequest {
    pub fn into_credentials(self) -> Result<Credentials, validator::ValidationErrors> {
        self.validate()?;

        Ok(Credentials {
            username: self.username,
            password: SecretString::from(self.password),
        })
    }
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
