//! minichat-storage
//!
//! DynamoDB operations behind the [`store::ChatStore`] trait, plus an
//! in-memory store with the same query semantics for local runs and tests.

pub mod client;
pub mod dynamo;
pub mod error;
pub mod item;
pub mod memory;
pub mod store;
