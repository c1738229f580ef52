use std::env;

use crate::error::ClientError;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:3000";

/// Front-end settings read from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the chat API, without a trailing slash.
    pub api_base: String,
    pub liff_id: String,
    /// LINE access token from a completed login. Unset means the user
    /// still has to log in.
    pub access_token: Option<String>,
    pub redirect_uri: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let liff_id = get("LIFF_ID").ok_or_else(|| ClientError::MissingConfig("LIFF_ID".into()))?;
        let api_base = get("MINICHAT_API_BASE")
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_base,
            liff_id,
            access_token: get("LINE_ACCESS_TOKEN"),
            redirect_uri: get("MINICHAT_REDIRECT_URI"),
        })
    }
}
