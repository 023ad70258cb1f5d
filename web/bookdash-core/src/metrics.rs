//! Pure aggregations over a fetched book list.
//!
//! Timestamp policy: `created_at`/`updated_at` are parsed as RFC 3339
//! first, then as a bare date. A timestamp that parses as neither is
//! ordered as the minimum instant, so such records sort last in
//! most-recently-updated output instead of failing the aggregation.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use bookdash_catalog::BookRecord;
use chrono::{DateTime, NaiveDate, Utc};

/// Number of records in the batch.
pub fn book_count(books: &[BookRecord]) -> usize {
    books.len()
}

/// Sum of page counts across the batch.
pub fn total_page_count(books: &[BookRecord]) -> u64 {
    books.iter().map(|b| u64::from(b.page_count)).sum()
}

/// Mean page count rounded to the nearest integer; 0 for an empty batch.
pub fn average_page_count(books: &[BookRecord]) -> u64 {
    if books.is_empty() {
        return 0;
    }
    let n = books.len() as u64;
    (total_page_count(books) + n / 2) / n
}

/// The `n` most common languages as `(uppercased code, count)` pairs,
/// descending by count.
///
/// Grouping is case-insensitive. Ties break alphabetically on the
/// uppercased code, so the ranking is deterministic regardless of input
/// order.
pub fn top_languages(books: &[BookRecord], n: usize) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for book in books {
        *counts.entry(book.language.to_uppercase()).or_default() += 1;
    }

    // BTreeMap iterates alphabetically and the sort is stable, which is
    // what makes count ties come out alphabetical.
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by_key(|(_, count)| Reverse(*count));
    ranked.truncate(n);
    ranked
}

/// The `n` most recently updated records, newest first.
///
/// Sorts a copy; the input slice is never reordered.
pub fn recently_updated(books: &[BookRecord], n: usize) -> Vec<BookRecord> {
    let mut sorted = books.to_vec();
    sorted.sort_by_key(|b| Reverse(instant_or_min(&b.updated_at)));
    sorted.truncate(n);
    sorted
}

/// The record with the greatest `updated_at`, for the freshness headline.
pub fn latest_update(books: &[BookRecord]) -> Option<&BookRecord> {
    books.iter().max_by_key(|b| instant_or_min(&b.updated_at))
}

/// Parse a timestamp as RFC 3339, falling back to a bare `YYYY-MM-DD`
/// date at midnight UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    let date = raw.parse::<NaiveDate>().ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

fn instant_or_min(raw: &str) -> DateTime<Utc> {
    parse_instant(raw).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
mod tests {
    use bookdash_catalog::FALLBACK_BOOKS;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn book(id: &str, language: &str, page_count: u32, updated_at: &str) -> BookRecord {
        BookRecord {
            id: id.to_string(),
            title: format!("Title {id}"),
            author: "Author".to_string(),
            publisher: "Publisher".to_string(),
            published_date: "2023-01-01".to_string(),
            page_count,
            language: language.to_string(),
            created_at: "2023-01-01T00:00:00Z".to_string(),
            updated_at: updated_at.to_string(),
            user_uid: None,
        }
    }

    /// Ten records with distinct update instants, oldest first.
    fn ten_books() -> Vec<BookRecord> {
        (1..=10)
            .map(|day| {
                book(
                    &format!("b-{day}"),
                    "en",
                    100,
                    &format!("2024-03-{day:02}T12:00:00Z"),
                )
            })
            .collect()
    }

    #[test]
    fn average_of_empty_list_is_zero() {
        assert_eq!(average_page_count(&[]), 0);
    }

    #[test]
    fn average_of_single_record_is_its_page_count() {
        let books = vec![book("b-1", "en", 288, "2024-01-01T00:00:00Z")];
        assert_eq!(average_page_count(&books), 288);
    }

    #[test]
    fn average_rounds_to_nearest() {
        let books = vec![
            book("b-1", "en", 100, "2024-01-01T00:00:00Z"),
            book("b-2", "en", 101, "2024-01-01T00:00:00Z"),
        ];
        // 100.5 rounds up
        assert_eq!(average_page_count(&books), 101);
    }

    #[test]
    fn absent_page_counts_average_as_zero() {
        let books = vec![
            book("b-1", "en", 300, "2024-01-01T00:00:00Z"),
            book("b-2", "en", 0, "2024-01-01T00:00:00Z"),
        ];
        assert_eq!(average_page_count(&books), 150);
    }

    #[test]
    fn count_of_fallback_dataset_is_three() {
        assert_eq!(book_count(&FALLBACK_BOOKS), 3);
    }

    #[test]
    fn languages_group_case_insensitively() {
        let books = vec![
            book("b-1", "en", 0, "2024-01-01T00:00:00Z"),
            book("b-2", "EN", 0, "2024-01-01T00:00:00Z"),
            book("b-3", "fr", 0, "2024-01-01T00:00:00Z"),
        ];
        assert_eq!(top_languages(&books, 3), vec![
            ("EN".to_string(), 2),
            ("FR".to_string(), 1),
        ]);
    }

    #[test]
    fn language_ties_break_alphabetically_regardless_of_input_order() {
        let forward = vec![
            book("b-1", "fr", 0, "2024-01-01T00:00:00Z"),
            book("b-2", "de", 0, "2024-01-01T00:00:00Z"),
        ];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();

        let expected = vec![("DE".to_string(), 1), ("FR".to_string(), 1)];
        assert_eq!(top_languages(&forward, 2), expected);
        assert_eq!(top_languages(&reversed, 2), expected);
    }

    #[test]
    fn top_languages_truncates_to_n() {
        let books = vec![
            book("b-1", "en", 0, "2024-01-01T00:00:00Z"),
            book("b-2", "en", 0, "2024-01-01T00:00:00Z"),
            book("b-3", "fr", 0, "2024-01-01T00:00:00Z"),
            book("b-4", "de", 0, "2024-01-01T00:00:00Z"),
        ];
        assert_eq!(top_languages(&books, 1), vec![("EN".to_string(), 2)]);
    }

    #[test]
    fn recently_updated_does_not_mutate_input() {
        let books = ten_books();
        let before = books.clone();
        let _ = recently_updated(&books, 6);
        assert_eq!(books, before);
    }

    #[test]
    fn recently_updated_takes_six_of_ten_newest_first() {
        let recent = recently_updated(&ten_books(), 6);
        assert_eq!(recent.len(), 6);
        let ids: Vec<_> = recent.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b-10", "b-9", "b-8", "b-7", "b-6", "b-5"]);
    }

    #[test]
    fn recently_updated_returns_all_of_a_short_list_in_order() {
        let books = vec![
            book("old", "en", 0, "2023-01-01T00:00:00Z"),
            book("new", "en", 0, "2024-01-01T00:00:00Z"),
        ];
        let ids: Vec<_> = recently_updated(&books, 6)
            .iter()
            .map(|b| b.id.clone())
            .collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn malformed_timestamps_sort_last() {
        let books = vec![
            book("garbled", "en", 0, "not a timestamp"),
            book("dated", "en", 0, "2020-05-05"),
            book("precise", "en", 0, "2024-06-01T08:00:00Z"),
        ];
        let ids: Vec<_> = recently_updated(&books, 3)
            .iter()
            .map(|b| b.id.clone())
            .collect();
        assert_eq!(ids, vec!["precise", "dated", "garbled"]);
    }

    #[test]
    fn latest_update_of_empty_list_is_none() {
        assert_eq!(latest_update(&[]), None);
    }

    #[test]
    fn latest_update_finds_the_newest_record() {
        let books = ten_books();
        assert_eq!(latest_update(&books).map(|b| b.id.as_str()), Some("b-10"));
    }

    #[test]
    fn parse_instant_handles_both_timestamp_shapes() {
        assert!(parse_instant("2023-10-01T00:00:00Z").is_some());
        assert!(parse_instant("2023-10-01").is_some());
        assert_eq!(parse_instant("yesterday-ish"), None);
    }

    fn arb_book() -> impl Strategy<Value = BookRecord> {
        (
            "[a-z]{1,8}",
            "[a-z]{2}",
            0u32..2000,
            // Mix of valid days and a sentinel that fails to parse.
            prop_oneof![
                (1u32..=28).prop_map(|d| format!("2024-01-{d:02}T00:00:00Z")),
                Just("bogus".to_string()),
            ],
        )
            .prop_map(|(id, lang, pages, updated)| book(&id, &lang, pages, &updated))
    }

    proptest! {
        #[test]
        fn recently_updated_is_sorted_and_sized(
            books in proptest::collection::vec(arb_book(), 0..20),
            n in 0usize..10,
        ) {
            let recent = recently_updated(&books, n);
            prop_assert_eq!(recent.len(), n.min(books.len()));
            for pair in recent.windows(2) {
                let newer = parse_instant(&pair[0].updated_at)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC);
                let older = parse_instant(&pair[1].updated_at)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC);
                prop_assert!(newer >= older);
            }
        }

        #[test]
        fn language_counts_sum_to_batch_size(
            books in proptest::collection::vec(arb_book(), 0..20),
        ) {
            let ranked = top_languages(&books, usize::MAX);
            let total: usize = ranked.iter().map(|(_, count)| count).sum();
            prop_assert_eq!(total, books.len());
        }
    }
}
