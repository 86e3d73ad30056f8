use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure a handler can surface. Bodies are plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Email Account not found.")]
    AccountNotFound,

    #[error("Email Message not found.")]
    MessageNotFound,

    /// 404 without a reason, used by the account lookup endpoints.
    #[error("")]
    NotFound,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::AccountNotFound | ApiError::MessageNotFound | ApiError::NotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::InvalidEmail | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound => status.into_response(),
            ApiError::Database(e) => {
                tracing::error!(error = %e, "storage failure");
                (status, "Internal server error").into_response()
            }
            other => (status, other.to_string()).into_response(),
        }
    }
}
