//! Error handling for catalog fetches.

use thiserror::Error;

/// Generic message used when a failure carries no description of its own.
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the Books API";

/// Failure modes of a catalog fetch.
///
/// Only [`CatalogError::InvalidConfig`] ever reaches a caller, and only
/// from client construction. Fetch-time errors are converted into the
/// fallback result by [`CatalogClient::fetch_catalog`].
///
/// [`CatalogClient::fetch_catalog`]: crate::CatalogClient::fetch_catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The API answered with a non-success status.
    #[error("API request failed with status {0}")]
    Status(u16),
    /// Network failure, timeout, or an unparseable response body.
    #[error("{}", display_or_generic(.0))]
    Transport(#[from] reqwest::Error),
    #[error("invalid catalog configuration: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    /// The diagnostic shown to users, always non-empty.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

fn display_or_generic(err: &reqwest::Error) -> String {
    let msg = err.to_string();
    if msg.is_empty() {
        UNREACHABLE_MESSAGE.to_string()
    } else {
        msg
    }
}
