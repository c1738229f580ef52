use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One turn of a bot conversation, keyed by (`user_id`, `timestamp`).
///
/// Rows are append-only: a turn is never rewritten once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Owner of the conversation. Assistant turns carry the user's ID too.
    pub user_id: String,
    pub timestamp: String,
    pub message: String,
    pub role: ChatRole,
}

impl ChatMessage {
    pub fn user(user_id: &str, message: &str, timestamp: String) -> Self {
        Self {
            user_id: user_id.to_string(),
            timestamp,
            message: message.to_string(),
            role: ChatRole::User,
        }
    }

    pub fn assistant(user_id: &str, message: &str, timestamp: String) -> Self {
        Self {
            user_id: user_id.to_string(),
            timestamp,
            message: message.to_string(),
            role: ChatRole::Assistant,
        }
    }
}

/// Role of a bot conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            other => Err(CoreError::InvalidRole(other.to_string())),
        }
    }
}
