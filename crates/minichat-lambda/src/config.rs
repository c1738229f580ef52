use std::env;
use std::net::SocketAddr;

use minichat_completion::config::CompletionConfig;
use minichat_core::tables::{
    DEFAULT_CHAT_HISTORY_TABLE, DEFAULT_USER_CHAT_TABLE, DEFAULT_USER_TABLE,
};
use minichat_storage::dynamo::TableNames;

/// Which [`minichat_storage::store::ChatStore`] backs the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    /// Process-local tables, lost on exit. For local runs only.
    Memory,
}

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub tables: TableNames,
    pub store: StoreBackend,
    /// Serve over TCP instead of the Lambda runtime when set.
    pub listen_addr: Option<SocketAddr>,
    pub region: Option<String>,
    /// API Gateway stage the routes are also served under, e.g. `dev`.
    pub stage: Option<String>,
    pub completion: CompletionConfig,
}

impl LambdaConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let tables = TableNames {
            chat_history: get("CHAT_HISTORY_TABLE")
                .unwrap_or_else(|| DEFAULT_CHAT_HISTORY_TABLE.to_string()),
            user_chat: get("USER_CHAT_TABLE")
                .unwrap_or_else(|| DEFAULT_USER_CHAT_TABLE.to_string()),
            users: get("USER_TABLE").unwrap_or_else(|| DEFAULT_USER_TABLE.to_string()),
        };

        let store = match get("MINICHAT_STORE").as_deref() {
            None | Some("dynamodb") => StoreBackend::DynamoDb,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(eyre::eyre!(
                    "MINICHAT_STORE must be `dynamodb` or `memory`, got `{other}`"
                ));
            }
        };

        let listen_addr = get("MINICHAT_LISTEN_ADDR")
            .map(|addr| {
                addr.parse::<SocketAddr>()
                    .map_err(|e| eyre::eyre!("invalid MINICHAT_LISTEN_ADDR `{addr}`: {e}"))
            })
            .transpose()?;

        Ok(Self {
            tables,
            store,
            listen_addr,
            region: get("AWS_REGION"),
            stage: get("API_STAGE"),
            completion: CompletionConfig::from_lookup(&lookup)?,
        })
    }
}
