//! minichat-completion
//!
//! Single-prompt text completion behind the [`service::CompletionService`]
//! trait, with OpenAI chat-completions and Bedrock Converse backends.

pub mod bedrock;
pub mod config;
pub mod error;
pub mod openai;
pub mod service;
