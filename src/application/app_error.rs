use axum::extract::rejection::JsonRejection;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Invalid request body: {0}")]
    InvalidJson(#[from] JsonRejection),
    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationErrors),
    #[error("Status Field is required.")]
    StatusRequired,
    #[error("Invalid date for `{field}`: {value}")]
    InvalidDate { field: &'static str, value: String },
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("There is no profile for this user")]
    ProfileNotFound,
    #[error("No token, authorization denied")]
    MissingToken,
    #[error("Token is not valid")]
    InvalidToken,
}

pub type AppResult<T> = Result<T, AppError>;
