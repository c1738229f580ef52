use minichat_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("DynamoDB PutItem error: {0}")]
    PutItem(String),

    #[error("DynamoDB Query error: {0}")]
    Query(String),

    #[error("DynamoDB Scan error: {0}")]
    Scan(String),

    #[error("malformed item: {0}")]
    Item(#[from] CoreError),
}
