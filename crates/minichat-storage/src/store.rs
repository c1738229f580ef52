use async_trait::async_trait;

use minichat_core::models::chat_message::ChatMessage;
use minichat_core::models::peer_message::PeerMessage;
use minichat_core::models::user_profile::{UserProfile, UserSummary};

use crate::error::StorageError;

/// Persistence for bot turns, peer messages and the user directory.
///
/// Every write is a single-item put; nothing is updated in place or
/// deleted. Implementations must be cheap to share across requests.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Append a bot conversation turn.
    async fn put_chat_message(&self, message: &ChatMessage) -> Result<(), StorageError>;

    /// The newest `limit` turns owned by `user_id`, newest first.
    async fn recent_chat_messages(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, StorageError>;

    /// Append a user-to-user message.
    async fn put_peer_message(&self, message: &PeerMessage) -> Result<(), StorageError>;

    /// Messages sent by `sender_id` to `receiver_id`, oldest first.
    ///
    /// `limit` bounds the receiver's inbox items evaluated before the
    /// sender filter is applied, so the result may be shorter than `limit`
    /// even when more matching messages exist.
    async fn peer_thread(
        &self,
        sender_id: &str,
        receiver_id: &str,
        limit: usize,
    ) -> Result<Vec<PeerMessage>, StorageError>;

    /// Insert or overwrite the profile row for `profile.user_id`.
    async fn put_user_profile(&self, profile: &UserProfile) -> Result<(), StorageError>;

    /// One page of the user directory.
    async fn user_page(&self, request: PageRequest) -> Result<UserPage, StorageError>;

    /// The whole user directory, following continuation cursors until
    /// the scan is exhausted.
    async fn list_users(&self) -> Result<Vec<UserSummary>, StorageError> {
        let mut users = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self
                .user_page(PageRequest {
                    limit: None,
                    cursor: cursor.take(),
                })
                .await?;
            users.extend(page.users);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(users)
    }
}

/// Paging parameters for a user directory scan.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// Maximum rows to return; `None` leaves the page size to the store.
    pub limit: Option<usize>,
    /// `userId` of the last row of the previous page.
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UserPage {
    pub users: Vec<UserSummary>,
    /// Present when more rows may follow.
    pub next_cursor: Option<String>,
}
