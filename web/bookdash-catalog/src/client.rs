//! Catalog client with single-shot fetch and fallback semantics.

use std::fmt::Debug;
use std::time::Duration;

use reqwest::header::{self, HeaderMap};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::CatalogClientConfig;
use crate::error::CatalogError;
use crate::fallback::FALLBACK_BOOKS;
use crate::types::{BookRecord, CatalogFetch};

/// Appended to every failure diagnostic so users know what they are seeing.
const FALLBACK_NOTICE: &str = "Showing curated sample data instead.";

/// A client for the Books catalog API.
///
/// Construction does the expensive work (header assembly, URL validation);
/// fetching is a single GET with no retry or backoff. Callers wanting
/// resilience beyond the built-in fallback must wrap this client, its
/// success/fallback contract does not change.
pub struct CatalogClient {
    http: reqwest::Client,
    books_url: Url,
    config: CatalogClientConfig,
}

impl Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    pub fn new(config: CatalogClientConfig) -> Result<Self, CatalogError> {
        // The API serves the collection under a trailing slash; joining by
        // hand keeps the configured path prefix intact, which Url::join
        // would strip.
        let books_url = format!("{}/books/", config.base_url.trim_end_matches('/'));
        let books_url = Url::parse(&books_url)
            .map_err(|e| CatalogError::InvalidConfig(format!("bad base URL: {e}")))?;

        let http = build_http_client(&config)?;

        Ok(Self {
            http,
            books_url,
            config,
        })
    }

    /// The configured catalog base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Interactive API documentation, served from the API host root.
    pub fn docs_url(&self) -> String {
        let origin = self.books_url.origin().ascii_serialization();
        format!("{origin}/docs")
    }

    /// External login endpoint; the UI links here, it never handles
    /// credentials itself.
    pub fn login_url(&self) -> String {
        format!(
            "{}/auth/login",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Fetch the book catalog, degrading to the curated fallback dataset.
    ///
    /// Never fails: every failure mode (transport, non-success status,
    /// unparseable body) collapses into the fallback records plus a
    /// renderable diagnostic. Exactly one HTTP call per invocation.
    #[instrument(skip_all, fields(url = %self.books_url))]
    pub async fn fetch_catalog(&self) -> CatalogFetch {
        match self.try_fetch().await {
            Ok(books) => {
                debug!(n_books = books.len(), "fetched live catalog");
                CatalogFetch { books, error: None }
            },
            Err(err) => {
                warn!(%err, "catalog fetch failed, serving fallback data");
                CatalogFetch {
                    books: FALLBACK_BOOKS.clone(),
                    error: Some(format!("{}. {FALLBACK_NOTICE}", err.user_message())),
                }
            },
        }
    }

    async fn try_fetch(&self) -> Result<Vec<BookRecord>, CatalogError> {
        let response = self.http.get(self.books_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        Ok(response.json::<Vec<BookRecord>>().await?)
    }
}

/// Build the HTTP client with JSON, freshness, and auth default headers.
fn build_http_client(config: &CatalogClientConfig) -> Result<reqwest::Client, CatalogError> {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    // Informational hint to intermediary caches; the client never caches.
    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_str(&format!("max-age={}", config.revalidate_secs))
            .map_err(|e| CatalogError::InvalidConfig(e.to_string()))?,
    );

    if let Some(token) = &config.access_token {
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| CatalogError::InvalidConfig(e.to_string()))?,
        );
    }

    debug!(
        base_url = %config.base_url,
        has_token = config.access_token.is_some(),
        "building catalog HTTP client"
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| CatalogError::InvalidConfig(e.to_string()))
}
