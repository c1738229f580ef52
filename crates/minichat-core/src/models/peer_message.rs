use serde::{Deserialize, Serialize};

/// A message sent from one user to another.
///
/// Stored under the sender's partition (`userId` attribute) and reachable
/// by receiver through the `ReceiverIdIndex` secondary index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub timestamp: String,
    pub message: String,
}

impl PeerMessage {
    pub fn new(sender_id: &str, receiver_id: &str, message: &str, timestamp: String) -> Self {
        Self {
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            timestamp,
            message: message.to_string(),
        }
    }
}
