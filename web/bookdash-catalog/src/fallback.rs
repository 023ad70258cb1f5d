//! Curated sample data shown when the live API is unreachable.

use std::sync::LazyLock;

use crate::types::BookRecord;

/// The fixed fallback dataset: exactly three records, never mutated.
///
/// Tests rely on these contents being stable, so treat any edit here as a
/// breaking change to the fallback contract.
pub static FALLBACK_BOOKS: LazyLock<Vec<BookRecord>> = LazyLock::new(|| {
    vec![
        BookRecord {
            id: "demo-001".to_string(),
            title: "Designing Fast APIs".to_string(),
            author: "Tech Core Team".to_string(),
            publisher: "Books Platform".to_string(),
            published_date: "2023-10-01".to_string(),
            page_count: 288,
            language: "en".to_string(),
            created_at: "2023-10-01T00:00:00Z".to_string(),
            updated_at: "2023-10-01T00:00:00Z".to_string(),
            user_uid: None,
        },
        BookRecord {
            id: "demo-002".to_string(),
            title: "Async Python Patterns".to_string(),
            author: "Ops Guild".to_string(),
            publisher: "Books Platform".to_string(),
            published_date: "2023-06-15".to_string(),
            page_count: 352,
            language: "en".to_string(),
            created_at: "2023-06-15T00:00:00Z".to_string(),
            updated_at: "2023-07-11T00:00:00Z".to_string(),
            user_uid: None,
        },
        BookRecord {
            id: "demo-003".to_string(),
            title: "Scaling Book Reviews".to_string(),
            author: "Data Chapter".to_string(),
            publisher: "Books Platform".to_string(),
            published_date: "2024-01-20".to_string(),
            page_count: 240,
            language: "en".to_string(),
            created_at: "2024-01-20T00:00:00Z".to_string(),
            updated_at: "2024-02-02T00:00:00Z".to_string(),
            user_uid: None,
        },
    ]
});
