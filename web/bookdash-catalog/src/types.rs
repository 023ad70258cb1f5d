//! Catalog wire types.
//!
//! Field names match the JSON the Books API emits; timestamps stay as
//! strings at rest and are only parsed where ordering requires it.

use serde::{Deserialize, Serialize};

/// A single book as returned by `GET {base_url}/books/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Opaque identifier, unique within a fetched batch.
    pub id: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    /// Publication date, e.g. `"2023-10-01"`.
    pub published_date: String,
    /// Absent in older records; treated as zero when averaging.
    #[serde(default)]
    pub page_count: u32,
    /// Short language code as given, e.g. `"en"`. Uppercased for display
    /// but never rewritten at rest.
    pub language: String,
    /// RFC 3339 timestamps.
    pub created_at: String,
    pub updated_at: String,
    /// `None` means the record came from a service-level import rather
    /// than an end user.
    #[serde(default)]
    pub user_uid: Option<String>,
}

/// Outcome of a catalog fetch.
///
/// `books` is always renderable: live data on success, the curated
/// fallback dataset otherwise. `error` carries a human-readable
/// diagnostic suitable for direct display when the live API was not used.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFetch {
    pub books: Vec<BookRecord>,
    pub error: Option<String>,
}

impl CatalogFetch {
    /// Whether this result came from the fallback dataset.
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}
