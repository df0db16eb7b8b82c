use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for token metadata aggregation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("token registry unavailable at {url}: {reason}")]
    NetworkUnavailable { url: String, reason: String },

    #[error("invalid token list: {0}")]
    InvalidTokenList(String),

    #[error("cannot read asset directory {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_address(address: &str, reason: impl Into<String>) -> Self {
        Error::InvalidAddress {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}
