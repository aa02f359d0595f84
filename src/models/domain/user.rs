use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    /// Role assigned at registration.
    pub fn for_username(username: &str, admin_username: &str) -> Self {
        if username == admin_username {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }

    pub fn is_admin(self) -> bool {
        self == UserRole::Admin
    }
}

/// One entry of `users.json`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    /// Argon2 PHC string, never the raw password.
    pub password_hash: String,
    pub role: UserRole,
}

impl User {
    pub fn new(username: &str, password_hash: String, admin_username: &str) -> Self {
        User {
            username: username.to_string(),
            password_hash,
            role: UserRole::for_username(username, admin_username),
        }
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(username: &str, role: UserRole) -> Self {
        User {
            username: username.to_string(),
            password_hash: "$argon2id$test".to_string(),
            role,
        }
    }
}
