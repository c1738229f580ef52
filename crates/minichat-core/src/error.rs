use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
