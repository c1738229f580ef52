//! View models for the terminal front-end.
//!
//! Each view holds plain state and exposes async actions over a
//! [`crate::api::ChatApi`]. Failures are logged and leave state alone.

pub mod bot;
pub mod peer;
pub mod picker;
