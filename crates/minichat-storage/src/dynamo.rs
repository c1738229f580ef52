use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use minichat_core::models::chat_message::ChatMessage;
use minichat_core::models::peer_message::PeerMessage;
use minichat_core::models::user_profile::UserProfile;
use minichat_core::tables::{ATTR_USER_ID, RECEIVER_INDEX};
use minichat_core::timestamp::EPOCH;

use crate::error::StorageError;
use crate::item;
use crate::store::{ChatStore, PageRequest, UserPage};

/// Physical table names, supplied by the environment.
#[derive(Debug, Clone)]
pub struct TableNames {
    pub chat_history: String,
    pub user_chat: String,
    pub users: String,
}

/// [`ChatStore`] backed by three DynamoDB tables.
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    tables: TableNames,
}

impl DynamoStore {
    pub fn new(client: Client, tables: TableNames) -> Self {
        Self { client, tables }
    }

    async fn put(&self, table: &str, item: item::Item) -> Result<(), StorageError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| StorageError::PutItem(e.into_service_error().to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ChatStore for DynamoStore {
    async fn put_chat_message(&self, message: &ChatMessage) -> Result<(), StorageError> {
        self.put(&self.tables.chat_history, item::chat_message_item(message))
            .await
    }

    async fn recent_chat_messages(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, StorageError> {
        let resp = self
            .client
            .query()
            .table_name(&self.tables.chat_history)
            .key_condition_expression("userId = :userId")
            .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
            .scan_index_forward(false)
            .limit(query_limit(limit))
            .send()
            .await
            .map_err(|e| StorageError::Query(e.into_service_error().to_string()))?;

        let messages = resp
            .items()
            .iter()
            .map(item::chat_message_from_item)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(user_id, count = messages.len(), "loaded chat history");
        Ok(messages)
    }

    async fn put_peer_message(&self, message: &PeerMessage) -> Result<(), StorageError> {
        self.put(&self.tables.user_chat, item::peer_message_item(message))
            .await
    }

    async fn peer_thread(
        &self,
        sender_id: &str,
        receiver_id: &str,
        limit: usize,
    ) -> Result<Vec<PeerMessage>, StorageError> {
        let resp = self
            .client
            .query()
            .table_name(&self.tables.user_chat)
            .index_name(RECEIVER_INDEX)
            .key_condition_expression("receiverId = :receiverId AND #ts >= :minTs")
            .filter_expression("userId = :userId")
            .expression_attribute_names("#ts", "timestamp")
            .expression_attribute_values(
                ":receiverId",
                AttributeValue::S(receiver_id.to_string()),
            )
            .expression_attribute_values(":userId", AttributeValue::S(sender_id.to_string()))
            .expression_attribute_values(":minTs", AttributeValue::S(EPOCH.to_string()))
            .scan_index_forward(true)
            .limit(query_limit(limit))
            .send()
            .await
            .map_err(|e| StorageError::Query(e.into_service_error().to_string()))?;

        let messages = resp
            .items()
            .iter()
            .map(item::peer_message_from_item)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(sender_id, receiver_id, count = messages.len(), "loaded peer thread");
        Ok(messages)
    }

    async fn put_user_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.put(&self.tables.users, item::user_profile_item(profile))
            .await
    }

    async fn user_page(&self, request: PageRequest) -> Result<UserPage, StorageError> {
        let start_key = request.cursor.map(|user_id| {
            HashMap::from([(ATTR_USER_ID.to_string(), AttributeValue::S(user_id))])
        });

        let resp = self
            .client
            .scan()
            .table_name(&self.tables.users)
            .projection_expression("userId, displayName, pictureUrl")
            .set_limit(request.limit.map(query_limit))
            .set_exclusive_start_key(start_key)
            .send()
            .await
            .map_err(|e| StorageError::Scan(e.into_service_error().to_string()))?;

        let users = resp
            .items()
            .iter()
            .map(item::user_summary_from_item)
            .collect::<Result<Vec<_>, _>>()?;

        let next_cursor = resp
            .last_evaluated_key()
            .and_then(|key| key.get(ATTR_USER_ID))
            .and_then(|v| v.as_s().ok())
            .cloned();

        Ok(UserPage { users, next_cursor })
    }
}

fn query_limit(limit: usize) -> i32 {
    i32::try_from(limit).unwrap_or(i32::MAX)
}
