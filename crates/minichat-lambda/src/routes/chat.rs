use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::info;

use minichat_core::models::chat_message::ChatMessage;
use minichat_core::tables::BOT_HISTORY_LIMIT;
use minichat_core::timestamp;

use crate::error::ApiError;
use crate::extract::{JsonBody, require};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    /// Up to 20 turns, newest first, as they stood before this exchange.
    pub chat_history: Vec<ChatMessage>,
}

/// Store the user's turn, ask the completion service, store its reply.
///
/// The two writes are independent puts: if the completion fails after the
/// user turn is stored, that turn stays without a reply.
pub async fn chat(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    require("userId", &req.user_id)?;
    require("message", &req.message)?;

    let chat_history = state
        .store
        .recent_chat_messages(&req.user_id, BOT_HISTORY_LIMIT)
        .await?;

    let user_turn = ChatMessage::user(&req.user_id, &req.message, timestamp::now());
    state.store.put_chat_message(&user_turn).await?;

    let reply = state.completion.complete(&req.message).await?;

    // Strictly after the user turn so both rows keep distinct sort keys.
    let assistant_turn = ChatMessage::assistant(
        &req.user_id,
        &reply,
        timestamp::now_after(&user_turn.timestamp)?,
    );
    state.store.put_chat_message(&assistant_turn).await?;

    info!(
        user_id = %req.user_id,
        history = chat_history.len(),
        provider = state.completion.name(),
        "bot exchange stored"
    );

    Ok(Json(ChatResponse {
        response: reply,
        chat_history,
    }))
}
