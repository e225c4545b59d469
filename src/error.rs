use std::sync::Arc;

use thiserror::Error;

/// Failures observable by the caller of this crate.
///
/// Only request construction can fail. Once an envelope is handed to the
/// transport, the outcome of the exchange is never reported as an error.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("failed to serialize request: {0}")]
    Serialize(Arc<serde_json::Error>),
    #[error("request id overflow")]
    RequestIdOverflow,
    #[error("invalid endpoint url `{url}`: {source}")]
    Url {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    Http(Arc<reqwest::Error>),
}
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(Arc::new(e))
    }
}
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(Arc::new(e))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
