use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::info;

use minichat_core::models::user_profile::{UserProfile, UserSummary};
use minichat_core::timestamp;
use minichat_storage::store::PageRequest;

use crate::error::ApiError;
use crate::extract::{JsonBody, require};
use crate::state::AppState;

/// Largest page served in paginated mode.
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Deserialize, Default)]
pub struct ListUsersQuery {
    pub limit: Option<usize>,
    pub cursor: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersResponse {
    pub users: Vec<UserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub user_id: String,
    pub display_name: String,
    #[serde(default)]
    pub picture_url: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterUserResponse {
    pub message: String,
}

/// List the user directory.
///
/// Without query parameters the whole table is returned. With `limit`
/// and/or `cursor` a single page is returned along with `nextCursor`.
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<Json<ListUsersResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if query.limit.is_none() && query.cursor.is_none() {
        let users = state.store.list_users().await?;
        return Ok(Json(ListUsersResponse {
            users,
            next_cursor: None,
        }));
    }

    let limit = query.limit.unwrap_or(MAX_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let page = state
        .store
        .user_page(PageRequest {
            limit: Some(limit),
            cursor: query.cursor.filter(|c| !c.is_empty()),
        })
        .await?;

    Ok(Json(ListUsersResponse {
        users: page.users,
        next_cursor: page.next_cursor,
    }))
}

/// Insert or overwrite the caller's directory entry.
pub async fn register_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterUserRequest>,
) -> Result<Json<RegisterUserResponse>, ApiError> {
    require("userId", &req.user_id)?;

    let profile = UserProfile {
        user_id: req.user_id,
        display_name: req.display_name,
        picture_url: req.picture_url,
        updated_at: timestamp::now(),
    };
    state.store.put_user_profile(&profile).await?;

    info!(user_id = %profile.user_id, "user profile updated");

    Ok(Json(RegisterUserResponse {
        message: "user profile updated".to_string(),
    }))
}
