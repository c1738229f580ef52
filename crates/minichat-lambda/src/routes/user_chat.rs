use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::info;

use minichat_core::models::peer_message::PeerMessage;
use minichat_core::tables::PEER_THREAD_LIMIT;
use minichat_core::timestamp;

use crate::error::ApiError;
use crate::extract::{JsonBody, require};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub chat_history: Vec<PeerMessage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRequest {
    pub user_id: String,
    pub other_user_id: String,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<PeerMessage>,
}

/// Store a message from one user to another and return the sender's side
/// of the thread.
pub async fn send_message(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    require("senderId", &req.sender_id)?;
    require("receiverId", &req.receiver_id)?;
    require("message", &req.message)?;

    let message = PeerMessage::new(
        &req.sender_id,
        &req.receiver_id,
        &req.message,
        timestamp::now(),
    );
    state.store.put_peer_message(&message).await?;

    info!(
        sender_id = %req.sender_id,
        receiver_id = %req.receiver_id,
        "peer message stored"
    );

    let chat_history = state
        .store
        .peer_thread(&req.sender_id, &req.receiver_id, PEER_THREAD_LIMIT)
        .await?;

    Ok(Json(SendMessageResponse { chat_history }))
}

/// Messages `userId` has sent to `otherUserId`, oldest first.
///
/// Messages in the other direction are not included.
pub async fn history(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<HistoryRequest>,
) -> Result<Json<HistoryResponse>, ApiError> {
    require("userId", &req.user_id)?;
    require("otherUserId", &req.other_user_id)?;

    let messages = state
        .store
        .peer_thread(&req.user_id, &req.other_user_id, PEER_THREAD_LIMIT)
        .await?;

    Ok(Json(HistoryResponse { messages }))
}
