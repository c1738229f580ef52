//! minichat-client library root.
//!
//! View models for the bot and peer conversations, the HTTP client they
//! talk through and the LINE profile provider that identifies the user.
//! The `minichat` binary renders these views in a terminal.

pub mod api;
pub mod config;
pub mod error;
pub mod identity;
pub mod views;
