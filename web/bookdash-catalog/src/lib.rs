//! HTTP client infrastructure for the Books catalog API.
//!
//! This crate provides:
//! - HTTP client construction with bearer token authentication
//! - A single-shot catalog fetch that degrades to a curated fallback
//!   dataset instead of surfacing failures to the caller
//! - The `BookRecord` wire type shared by all consumers
//!
//! ## Usage
//!
//! ```ignore
//! use bookdash_catalog::{CatalogClient, CatalogClientConfig};
//!
//! let config = CatalogClientConfig {
//!     base_url: "http://localhost:8000/api/v1.0.0".to_string(),
//!     access_token: Some(token),
//!     revalidate_secs: 30,
//! };
//!
//! let client = CatalogClient::new(config)?;
//! let fetch = client.fetch_catalog().await;
//! // fetch.books is never empty on the failure path; fetch.error carries
//! // a renderable diagnostic when the live API could not be used.
//! ```

mod client;
mod config;
mod error;
mod fallback;
mod types;

pub use client::CatalogClient;
pub use config::{
    CatalogClientConfig,
    BOOKDASH_API_TOKEN_VAR,
    BOOKDASH_API_URL_VAR,
    DEFAULT_CATALOG_URL,
};
pub use error::CatalogError;
pub use fallback::FALLBACK_BOOKS;
pub use types::{BookRecord, CatalogFetch};
