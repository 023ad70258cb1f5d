//! Configuration for catalog client construction.

use std::env;

pub const BOOKDASH_API_URL_VAR: &str = "BOOKDASH_API_URL";

pub const BOOKDASH_API_TOKEN_VAR: &str = "BOOKDASH_API_TOKEN";

/// Base URL used when no override is configured.
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:8000/api/v1.0.0";

/// How long intermediaries may reuse a response, in seconds.
///
/// Purely a hint forwarded as `Cache-Control: max-age`; the client itself
/// performs no caching.
pub const DEFAULT_REVALIDATE_SECS: u64 = 30;

/// Configuration for catalog client construction.
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Base URL for the catalog API.
    pub base_url: String,
    /// Optional bearer token; requests are sent unauthenticated without it.
    pub access_token: Option<String>,
    /// Freshness window hint attached to every request.
    pub revalidate_secs: u64,
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            access_token: None,
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
        }
    }
}

impl CatalogClientConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(BOOKDASH_API_URL_VAR)
                .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string()),
            access_token: env::var(BOOKDASH_API_TOKEN_VAR).ok(),
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
        }
    }
}
