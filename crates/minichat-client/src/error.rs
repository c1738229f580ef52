use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("missing configuration: {0}")]
    MissingConfig(String),
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("profile request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("profile API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("not logged in")]
    NotLoggedIn,

    #[error("invalid login URL: {0}")]
    LoginUrl(String),
}
