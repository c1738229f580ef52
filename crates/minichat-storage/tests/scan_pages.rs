use std::sync::Mutex;

use async_trait::async_trait;

use minichat_core::models::chat_message::ChatMessage;
use minichat_core::models::peer_message::PeerMessage;
use minichat_core::models::user_profile::UserProfile;
use minichat_storage::error::StorageError;
use minichat_storage::memory::MemoryStore;
use minichat_storage::store::{ChatStore, PageRequest, UserPage};

fn profile(user_id: &str) -> UserProfile {
    UserProfile {
        user_id: user_id.to_string(),
        display_name: user_id.to_uppercase(),
        picture_url: None,
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}

/// Wraps a [`MemoryStore`] and records the cursor of every scan request.
struct RecordingStore {
    inner: MemoryStore,
    scans: Mutex<Vec<Option<String>>>,
}

#[async_trait]
impl ChatStore for RecordingStore {
    async fn put_chat_message(&self, message: &ChatMessage) -> Result<(), StorageError> {
        self.inner.put_chat_message(message).await
    }

    async fn recent_chat_messages(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, StorageError> {
        self.inner.recent_chat_messages(user_id, limit).await
    }

    async fn put_peer_message(&self, message: &PeerMessage) -> Result<(), StorageError> {
        self.inner.put_peer_message(message).await
    }

    async fn peer_thread(
        &self,
        sender_id: &str,
        receiver_id: &str,
        limit: usize,
    ) -> Result<Vec<PeerMessage>, StorageError> {
        self.inner.peer_thread(sender_id, receiver_id, limit).await
    }

    async fn put_user_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.inner.put_user_profile(profile).await
    }

    async fn user_page(&self, request: PageRequest) -> Result<UserPage, StorageError> {
        self.scans.lock().unwrap().push(request.cursor.clone());
        self.inner.user_page(request).await
    }
}

#[tokio::test]
async fn list_users_follows_cursor_until_exhausted() {
    let store = RecordingStore {
        inner: MemoryStore::with_scan_page_size(2),
        scans: Mutex::new(Vec::new()),
    };
    for id in ["e", "a", "d", "b", "c"] {
        store.put_user_profile(&profile(id)).await.unwrap();
    }

    let users = store.list_users().await.unwrap();

    let ids: Vec<_> = users.iter().map(|u| u.user_id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c", "d", "e"]);
    assert_eq!(
        *store.scans.lock().unwrap(),
        vec![None, Some("b".to_string()), Some("d".to_string())]
    );
}

#[tokio::test]
async fn single_row_pages_still_collect_everything() {
    let store = RecordingStore {
        inner: MemoryStore::with_scan_page_size(1),
        scans: Mutex::new(Vec::new()),
    };
    for id in ["a", "b", "c"] {
        store.put_user_profile(&profile(id)).await.unwrap();
    }

    let users = store.list_users().await.unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(store.scans.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn scan_page_size_caps_requested_limit() {
    let store = MemoryStore::with_scan_page_size(2);
    for id in ["a", "b", "c"] {
        store.put_user_profile(&profile(id)).await.unwrap();
    }

    let page = store
        .user_page(PageRequest {
            limit: Some(10),
            cursor: None,
        })
        .await
        .unwrap();

    assert_eq!(page.users.len(), 2);
    assert_eq!(page.next_cursor.as_deref(), Some("b"));

    let page = store
        .user_page(PageRequest {
            limit: Some(1),
            cursor: None,
        })
        .await
        .unwrap();
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.next_cursor.as_deref(), Some("a"));
}

#[tokio::test]
async fn empty_directory_is_one_scan() {
    let store = RecordingStore {
        inner: MemoryStore::with_scan_page_size(2),
        scans: Mutex::new(Vec::new()),
    };

    assert!(store.list_users().await.unwrap().is_empty());
    assert_eq!(store.scans.lock().unwrap().len(), 1);
}
