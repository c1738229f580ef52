use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use minichat_core::models::chat_message::ChatMessage;
use minichat_core::models::peer_message::PeerMessage;
use minichat_core::models::user_profile::UserSummary;

use crate::error::ClientError;
use crate::identity::Profile;

/// Reply to a bot message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotReply {
    pub response: String,
    /// History as it stood before the exchange, newest first.
    pub chat_history: Vec<ChatMessage>,
}

/// The chat backend as the views see it.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn send_bot_message(&self, user_id: &str, message: &str)
    -> Result<BotReply, ClientError>;

    /// Returns the sender's side of the thread after the send.
    async fn send_peer_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        message: &str,
    ) -> Result<Vec<PeerMessage>, ClientError>;

    async fn fetch_history(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> Result<Vec<PeerMessage>, ClientError>;

    async fn list_users(&self) -> Result<Vec<UserSummary>, ClientError>;

    async fn register_user(&self, profile: &Profile) -> Result<(), ClientError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BotRequest<'a> {
    user_id: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PeerRequest<'a> {
    sender_id: &'a str,
    receiver_id: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeerResponse {
    chat_history: Vec<PeerMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRequest<'a> {
    user_id: &'a str,
    other_user_id: &'a str,
}

#[derive(Deserialize)]
struct HistoryResponse {
    messages: Vec<PeerMessage>,
}

#[derive(Deserialize)]
struct UsersResponse {
    users: Vec<UserSummary>,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// [`ChatApi`] over HTTP with `reqwest`.
#[derive(Clone)]
pub struct HttpChatApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpChatApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        decode(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MessageBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn send_bot_message(
        &self,
        user_id: &str,
        message: &str,
    ) -> Result<BotReply, ClientError> {
        self.post("/chat", &BotRequest { user_id, message }).await
    }

    async fn send_peer_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        message: &str,
    ) -> Result<Vec<PeerMessage>, ClientError> {
        let response: PeerResponse = self
            .post(
                "/user-chat",
                &PeerRequest {
                    sender_id,
                    receiver_id,
                    message,
                },
            )
            .await?;
        Ok(response.chat_history)
    }

    async fn fetch_history(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> Result<Vec<PeerMessage>, ClientError> {
        let response: HistoryResponse = self
            .post(
                "/user-chat-history",
                &HistoryRequest {
                    user_id,
                    other_user_id,
                },
            )
            .await?;
        Ok(response.messages)
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, ClientError> {
        let response: UsersResponse = self.get("/users").await?;
        Ok(response.users)
    }

    async fn register_user(&self, profile: &Profile) -> Result<(), ClientError> {
        let _: MessageBody = self.post("/register-user", profile).await?;
        Ok(())
    }
}
