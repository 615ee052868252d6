use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("Stored value {value:?} is not an integer")]
    Decode { value: String },

    #[error("Starting value {0} is out of range")]
    OutOfRange(i64),

    #[error("Invalid {key}: {reason}")]
    Config { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::OutOfRange { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Error occurred: {self}");

        (self.status(), self.to_string()).into_response()
    }
}

/// Renders an [`AppError`] as `{"error": "..."}` with a 500 status.
#[derive(Debug)]
pub struct JsonError(pub AppError);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<AppError> for JsonError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl From<redis::RedisError> for JsonError {
    fn from(e: redis::RedisError) -> Self {
        Self(AppError::Store(e))
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        error!("Error occurred: {}", self.0);

        let body = ErrorBody {
            error: self.0.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
