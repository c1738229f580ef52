//! Conversions between domain models and DynamoDB attribute maps.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use minichat_core::error::CoreError;
use minichat_core::models::chat_message::ChatMessage;
use minichat_core::models::peer_message::PeerMessage;
use minichat_core::models::user_profile::{UserProfile, UserSummary};
use minichat_core::tables::{
    ATTR_DISPLAY_NAME, ATTR_MESSAGE, ATTR_PICTURE_URL, ATTR_RECEIVER_ID, ATTR_ROLE,
    ATTR_TIMESTAMP, ATTR_UPDATED_AT, ATTR_USER_ID,
};

pub type Item = HashMap<String, AttributeValue>;

pub fn chat_message_item(message: &ChatMessage) -> Item {
    HashMap::from([
        (ATTR_USER_ID.to_string(), s(&message.user_id)),
        (ATTR_TIMESTAMP.to_string(), s(&message.timestamp)),
        (ATTR_MESSAGE.to_string(), s(&message.message)),
        (ATTR_ROLE.to_string(), s(message.role.as_str())),
    ])
}

pub fn chat_message_from_item(item: &Item) -> Result<ChatMessage, CoreError> {
    Ok(ChatMessage {
        user_id: string_attr(item, ATTR_USER_ID)?,
        timestamp: string_attr(item, ATTR_TIMESTAMP)?,
        message: string_attr(item, ATTR_MESSAGE)?,
        role: string_attr(item, ATTR_ROLE)?.parse()?,
    })
}

/// The sender is stored under `userId`, the table's partition key.
pub fn peer_message_item(message: &PeerMessage) -> Item {
    HashMap::from([
        (ATTR_USER_ID.to_string(), s(&message.sender_id)),
        (ATTR_RECEIVER_ID.to_string(), s(&message.receiver_id)),
        (ATTR_TIMESTAMP.to_string(), s(&message.timestamp)),
        (ATTR_MESSAGE.to_string(), s(&message.message)),
    ])
}

pub fn peer_message_from_item(item: &Item) -> Result<PeerMessage, CoreError> {
    Ok(PeerMessage {
        sender_id: string_attr(item, ATTR_USER_ID)?,
        receiver_id: string_attr(item, ATTR_RECEIVER_ID)?,
        timestamp: string_attr(item, ATTR_TIMESTAMP)?,
        message: string_attr(item, ATTR_MESSAGE)?,
    })
}

pub fn user_profile_item(profile: &UserProfile) -> Item {
    let mut item = HashMap::from([
        (ATTR_USER_ID.to_string(), s(&profile.user_id)),
        (ATTR_DISPLAY_NAME.to_string(), s(&profile.display_name)),
        (ATTR_UPDATED_AT.to_string(), s(&profile.updated_at)),
    ]);
    if let Some(url) = &profile.picture_url {
        item.insert(ATTR_PICTURE_URL.to_string(), s(url));
    }
    item
}

pub fn user_summary_from_item(item: &Item) -> Result<UserSummary, CoreError> {
    Ok(UserSummary {
        user_id: string_attr(item, ATTR_USER_ID)?,
        display_name: string_attr(item, ATTR_DISPLAY_NAME)?,
        picture_url: optional_string_attr(item, ATTR_PICTURE_URL),
    })
}

fn s(value: &str) -> AttributeValue {
    AttributeValue::S(value.to_string())
}

fn string_attr(item: &Item, name: &str) -> Result<String, CoreError> {
    optional_string_attr(item, name).ok_or_else(|| CoreError::MissingField(name.to_string()))
}

fn optional_string_attr(item: &Item, name: &str) -> Option<String> {
    item.get(name).and_then(|v| v.as_s().ok()).cloned()
}
