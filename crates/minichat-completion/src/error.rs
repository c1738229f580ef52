use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("completion API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown completion provider: {0}")]
    UnknownProvider(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),
}
