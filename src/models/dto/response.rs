use serde::Serialize;

use crate::models::domain::{User, UserRole};

/// What the client sees of a user; the password hash stays server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub username: String,
    pub role: UserRole,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            username: user.username,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckLoginResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_dto_hides_password_hash() {
        let user = User::test_user("alice", UserRole::User);
        let json = serde_json::to_value(UserDto::from(user)).unwrap();

        assert_eq!(json, json!({ "username": "alice", "role": "user" }));
    }

    #[test]
    fn test_check_login_logged_out_shape() {
        let response = CheckLoginResponse {
            logged_in: false,
            user: None,
        };

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "loggedIn": false })
        );
    }

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse {
            success: true,
            role: UserRole::Admin,
        };

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "success": true, "role": "admin" })
        );
    }
}
