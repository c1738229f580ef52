//! minichat-core
//!
//! Pure domain types, table layout, and timestamp conventions.
//! No AWS SDK dependency; this is the shared vocabulary of the minichat system.

pub mod error;
pub mod models;
pub mod tables;
pub mod timestamp;
