use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every request-level failure is reported as HTTP 400 with a
/// `{"error": "<message>"}` body. Not-found deliberately maps to 400
/// rather than 404; clients depend on the message, not the status class.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Path parameter is not a syntactically valid UUID
    #[error("invalid uuid")]
    InvalidUuid,

    /// Supplied repository url does not point at github
    #[error("It's not a valid github repository url")]
    InvalidRepositoryUrl,

    /// No repository with the requested id exists
    #[error("Repository not found.")]
    RepositoryNotFound,

    /// Configuration errors (startup only, never surfaced over HTTP)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUuid => StatusCode::BAD_REQUEST,
            AppError::InvalidRepositoryUrl => StatusCode::BAD_REQUEST,
            AppError::RepositoryNotFound => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
