//! DynamoDB table layout conventions.
//!
//! Pure string constants with no AWS SDK dependency. These define the canonical
//! attribute names, index names and query caps shared by the store
//! implementations and the request handlers.

/// Default table holding bot conversation turns (partition `userId`, sort `timestamp`).
pub const DEFAULT_CHAT_HISTORY_TABLE: &str = "minichat-chat-history";

/// Default table holding user-to-user messages (partition `userId`, sort `timestamp`).
pub const DEFAULT_USER_CHAT_TABLE: &str = "minichat-user-chat";

/// Default table holding one profile row per user (partition `userId`).
pub const DEFAULT_USER_TABLE: &str = "minichat-users";

/// Global secondary index on the user-chat table (partition `receiverId`, sort `timestamp`).
pub const RECEIVER_INDEX: &str = "ReceiverIdIndex";

pub const ATTR_USER_ID: &str = "userId";
pub const ATTR_RECEIVER_ID: &str = "receiverId";
pub const ATTR_TIMESTAMP: &str = "timestamp";
pub const ATTR_MESSAGE: &str = "message";
pub const ATTR_ROLE: &str = "role";
pub const ATTR_DISPLAY_NAME: &str = "displayName";
pub const ATTR_PICTURE_URL: &str = "pictureUrl";
pub const ATTR_UPDATED_AT: &str = "updatedAt";

/// Most recent bot turns returned alongside a reply.
pub const BOT_HISTORY_LIMIT: usize = 20;

/// Items evaluated by a peer thread query before the sender filter applies.
pub const PEER_THREAD_LIMIT: usize = 50;
