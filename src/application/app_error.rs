use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Failed to fetch entries: {0}")]
    FetchFailed(String),
}

impl AppError {
    /// Re-tags a storage failure as a failed read, so the listing route reports
    /// its own message. Other errors pass through unchanged.
    pub fn into_fetch_failure(self) -> Self {
        match self {
            AppError::Database(reason) => AppError::FetchFailed(reason),
            other => other,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::EmailRequired | AppError::InvalidEmail)
    }
}

pub type AppResult<T> = Result<T, AppError>;
