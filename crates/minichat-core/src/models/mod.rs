pub mod chat_message;
pub mod peer_message;
pub mod user_profile;
