use actix_web::{
    http::{
        header::{ContentType, LOCATION},
        StatusCode,
    },
    HttpResponse, ResponseError,
};
use serde::Serialize;
use thiserror::Error;

pub const ACCESS_DENIED_HTML: &str = "<h2>Access Denied: Admins Only</h2>";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("User already exists!")]
    DuplicateUser,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    /// No session is bound; the client is sent to `redirect_to`.
    #[error("Authentication required")]
    Unauthenticated { redirect_to: &'static str },

    #[error("Access Denied: Admins Only")]
    Forbidden,

    #[error("{0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::DuplicateUser => "DUPLICATE_USER",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unauthenticated { .. } => "UNAUTHENTICATED",
            AppError::Forbidden => "FORBIDDEN",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateUser => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthenticated { .. } => StatusCode::FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthenticated { redirect_to } => HttpResponse::Found()
                .insert_header((LOCATION, *redirect_to))
                .finish(),
            AppError::Forbidden => HttpResponse::Forbidden()
                .content_type(ContentType::html())
                .body(ACCESS_DENIED_HTML),
            _ => HttpResponse::build(self.status_code()).json(ErrorResponse {
                message: self.to_string(),
                code: self.error_code(),
            }),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Background task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
