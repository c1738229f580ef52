//! In-memory [`ChatStore`] with the same key and query semantics as the
//! DynamoDB tables: puts overwrite rows sharing a key, history is read
//! newest first, and peer threads apply the limit before the sender filter.

use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use tokio::sync::Mutex;

use minichat_core::models::chat_message::ChatMessage;
use minichat_core::models::peer_message::PeerMessage;
use minichat_core::models::user_profile::{UserProfile, UserSummary};
use minichat_core::timestamp::EPOCH;

use crate::error::StorageError;
use crate::store::{ChatStore, PageRequest, UserPage};

#[derive(Default)]
struct Tables {
    chat_history: BTreeMap<(String, String), ChatMessage>,
    user_chat: BTreeMap<(String, String), PeerMessage>,
    users: BTreeMap<String, UserProfile>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    scan_page_size: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap every user scan page at `size` rows, like DynamoDB's 1 MB scan
    /// page, so callers have to follow the continuation cursor.
    pub fn with_scan_page_size(size: usize) -> Self {
        Self {
            scan_page_size: Some(size.max(1)),
            ..Self::default()
        }
    }

    /// Every stored bot turn for `user_id`, oldest first.
    pub async fn chat_rows(&self, user_id: &str) -> Vec<ChatMessage> {
        let tables = self.tables.lock().await;
        tables
            .chat_history
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Every stored peer message, ordered by sender then timestamp.
    pub async fn peer_rows(&self) -> Vec<PeerMessage> {
        self.tables.lock().await.user_chat.values().cloned().collect()
    }

    /// Every stored profile, ordered by user ID.
    pub async fn user_rows(&self) -> Vec<UserProfile> {
        self.tables.lock().await.users.values().cloned().collect()
    }
}

#[async_trait]
impl ChatStore for MemoryStore {
    async fn put_chat_message(&self, message: &ChatMessage) -> Result<(), StorageError> {
        let key = (message.user_id.clone(), message.timestamp.clone());
        self.tables
            .lock()
            .await
            .chat_history
            .insert(key, message.clone());
        Ok(())
    }

    async fn recent_chat_messages(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, StorageError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .chat_history
            .values()
            .rev()
            .filter(|m| m.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn put_peer_message(&self, message: &PeerMessage) -> Result<(), StorageError> {
        let key = (message.sender_id.clone(), message.timestamp.clone());
        self.tables
            .lock()
            .await
            .user_chat
            .insert(key, message.clone());
        Ok(())
    }

    async fn peer_thread(
        &self,
        sender_id: &str,
        receiver_id: &str,
        limit: usize,
    ) -> Result<Vec<PeerMessage>, StorageError> {
        let tables = self.tables.lock().await;

        let mut inbox: Vec<&PeerMessage> = tables
            .user_chat
            .values()
            .filter(|m| m.receiver_id == receiver_id && m.timestamp.as_str() >= EPOCH)
            .collect();
        inbox.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

        Ok(inbox
            .into_iter()
            .take(limit)
            .filter(|m| m.sender_id == sender_id)
            .cloned()
            .collect())
    }

    async fn put_user_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.tables
            .lock()
            .await
            .users
            .insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }

    async fn user_page(&self, request: PageRequest) -> Result<UserPage, StorageError> {
        let tables = self.tables.lock().await;

        let lower = match &request.cursor {
            Some(cursor) => Bound::Excluded(cursor.clone()),
            None => Bound::Unbounded,
        };
        let mut remaining = tables.users.range((lower, Bound::Unbounded)).peekable();

        let page_size = match (request.limit, self.scan_page_size) {
            (Some(limit), Some(size)) => Some(limit.min(size)),
            (limit, size) => limit.or(size),
        };

        let mut users = Vec::new();
        while let Some((_, profile)) = remaining.next() {
            users.push(UserSummary::from(profile.clone()));
            if page_size.is_some_and(|size| users.len() >= size) {
                break;
            }
        }

        let next_cursor = match remaining.peek() {
            Some(_) => users.last().map(|u| u.user_id.clone()),
            None => None,
        };

        Ok(UserPage { users, next_cursor })
    }
}
