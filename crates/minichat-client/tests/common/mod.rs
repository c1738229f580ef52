#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use minichat_client::api::{BotReply, ChatApi};
use minichat_client::error::ClientError;
use minichat_client::identity::Profile;
use minichat_core::models::chat_message::ChatMessage;
use minichat_core::models::peer_message::PeerMessage;
use minichat_core::models::user_profile::UserSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Bot(String, String),
    Peer(String, String, String),
    History(String, String),
    ListUsers,
    Register(String),
}

/// Scripted [`ChatApi`] that records every call.
#[derive(Default)]
pub struct FakeApi {
    pub calls: Mutex<Vec<Call>>,
    pub fail: Mutex<bool>,
    pub bot_reply: Mutex<Option<BotReply>>,
    pub history: Mutex<Vec<PeerMessage>>,
    pub users: Mutex<Vec<UserSummary>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn set_history(&self, messages: Vec<PeerMessage>) {
        *self.history.lock().unwrap() = messages;
    }

    fn record(&self, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if *self.fail.lock().unwrap() {
            return Err(ClientError::Api {
                status: 500,
                message: "internal server error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ChatApi for FakeApi {
    async fn send_bot_message(
        &self,
        user_id: &str,
        message: &str,
    ) -> Result<BotReply, ClientError> {
        self.record(Call::Bot(user_id.into(), message.into()))?;
        Ok(self.bot_reply.lock().unwrap().clone().unwrap_or(BotReply {
            response: "ok".to_string(),
            chat_history: Vec::new(),
        }))
    }

    async fn send_peer_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        message: &str,
    ) -> Result<Vec<PeerMessage>, ClientError> {
        self.record(Call::Peer(sender_id.into(), receiver_id.into(), message.into()))?;
        let mut history = self.history.lock().unwrap();
        history.push(PeerMessage::new(
            sender_id,
            receiver_id,
            message,
            "2024-01-01T00:59:59.000Z".to_string(),
        ));
        Ok(history.clone())
    }

    async fn fetch_history(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> Result<Vec<PeerMessage>, ClientError> {
        self.record(Call::History(user_id.into(), other_user_id.into()))?;
        Ok(self.history.lock().unwrap().clone())
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, ClientError> {
        self.record(Call::ListUsers)?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn register_user(&self, profile: &Profile) -> Result<(), ClientError> {
        self.record(Call::Register(profile.user_id.clone()))
    }
}

pub fn profile(user_id: &str) -> Profile {
    Profile {
        user_id: user_id.to_string(),
        display_name: format!("{user_id} name"),
        picture_url: None,
    }
}

pub fn summary(user_id: &str) -> UserSummary {
    UserSummary {
        user_id: user_id.to_string(),
        display_name: format!("{user_id} name"),
        picture_url: None,
    }
}

pub fn peer_message(sender: &str, receiver: &str, text: &str, ts: &str) -> PeerMessage {
    PeerMessage::new(sender, receiver, text, ts.to_string())
}

pub fn chat_message(user_id: &str, text: &str, ts: &str, assistant: bool) -> ChatMessage {
    if assistant {
        ChatMessage::assistant(user_id, text, ts.to_string())
    } else {
        ChatMessage::user(user_id, text, ts.to_string())
    }
}
