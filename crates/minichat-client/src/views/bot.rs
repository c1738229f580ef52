use tracing::error;

use minichat_core::models::chat_message::ChatMessage;
use minichat_core::timestamp;

use crate::api::ChatApi;
use crate::identity::{self, Profile, ProfileProvider, Session};

/// A submitted turn waiting for the bot's reply.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    pub turn: ChatMessage,
}

/// Conversation with the completion bot.
#[derive(Debug, Default)]
pub struct BotView {
    pub user: Option<Profile>,
    pub login_url: Option<String>,
    pub input: String,
    pub messages: Vec<ChatMessage>,
}

impl BotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn mount(&mut self, provider: &dyn ProfileProvider) {
        match identity::establish(provider).await {
            Ok(Session::LoggedIn(profile)) => self.user = Some(profile),
            Ok(Session::LoginRequired { login_url }) => self.login_url = Some(login_url),
            Err(e) => error!("failed to establish identity: {e}"),
        }
    }

    /// Show the user's turn straight away. Returns `None` when the input
    /// is blank or nobody is logged in.
    pub fn begin_submit(&mut self) -> Option<PendingTurn> {
        let user = self.user.as_ref()?;
        if self.input.trim().is_empty() {
            return None;
        }

        let turn = ChatMessage::user(&user.user_id, &self.input, timestamp::now());
        self.messages.push(turn.clone());
        Some(PendingTurn { turn })
    }

    /// Send a pending turn and rebuild the list from the returned history.
    pub async fn complete(&mut self, api: &dyn ChatApi, pending: PendingTurn) {
        let PendingTurn { turn } = pending;

        match api.send_bot_message(&turn.user_id, &turn.message).await {
            Ok(reply) => {
                let mut messages = reply.chat_history;
                messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
                let answer = ChatMessage::assistant(&turn.user_id, &reply.response, timestamp::now());
                messages.push(turn);
                messages.push(answer);
                self.messages = messages;
            }
            Err(e) => error!("failed to send bot message: {e}"),
        }

        self.input.clear();
    }

    pub async fn submit(&mut self, api: &dyn ChatApi) {
        if let Some(pending) = self.begin_submit() {
            self.complete(api, pending).await;
        }
    }
}
