use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
///
/// Callers only ever see a bad request or a generic internal error; the
/// detail of an internal error stays in the server log.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<minichat_storage::error::StorageError> for ApiError {
    fn from(e: minichat_storage::error::StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<minichat_completion::error::CompletionError> for ApiError {
    fn from(e: minichat_completion::error::CompletionError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<minichat_core::error::CoreError> for ApiError {
    fn from(e: minichat_core::error::CoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
