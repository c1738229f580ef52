use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub const MISSING_BODY_MESSAGE: &str = "request body is required";

/// JSON request body where an absent or blank body is a 400 with a
/// readable message rather than axum's default rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ApiError::BadRequest(MISSING_BODY_MESSAGE.to_string()));
        }

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))?;

        Ok(JsonBody(value))
    }
}

/// Reject an empty or whitespace-only required field.
pub fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}
