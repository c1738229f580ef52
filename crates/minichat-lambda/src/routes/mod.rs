pub mod chat;
pub mod health;
pub mod preflight;
pub mod user_chat;
pub mod users;

use crate::error::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::NotFound("not found".to_string())
}
