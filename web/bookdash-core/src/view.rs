//! View-ready models for the landing page and operations dashboard.
//!
//! The models carry already-formatted strings so the rendering layer only
//! has to place them. Building a model is pure: one pass over the fetch
//! result, no I/O.

use bookdash_catalog::{BookRecord, CatalogFetch};

use crate::metrics;

/// How many language groups the dashboard ranks.
const TOP_LANGUAGES: usize = 3;

/// How many records the recent-activity table and feed show.
const RECENT_BOOKS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub meta: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightCard {
    pub title: String,
    pub detail: String,
    pub trend: String,
}

/// One row of the recent-activity table.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub language: String,
    pub updated: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    pub author: String,
    pub created: String,
}

/// Everything the dashboard page needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub stats: Vec<StatCard>,
    pub insights: Vec<InsightCard>,
    pub recent: Vec<ActivityRow>,
    pub feed: Vec<FeedEntry>,
    /// Fetch diagnostic, rendered as an alert banner when present.
    pub alert: Option<String>,
}

impl DashboardModel {
    pub fn build(fetch: &CatalogFetch) -> Self {
        let books = &fetch.books;

        let total_pages = metrics::total_page_count(books);
        let avg_pages = metrics::average_page_count(books);
        let languages = metrics::top_languages(books, TOP_LANGUAGES);
        let tracked: usize = languages.iter().map(|(_, count)| count).sum();
        let recent = metrics::recently_updated(books, RECENT_BOOKS);

        let stats = vec![
            StatCard {
                label: "Books indexed".to_string(),
                value: format_count(books.len() as u64),
                meta: "live".to_string(),
            },
            StatCard {
                label: "Avg. page count".to_string(),
                value: format!("{avg_pages} pages"),
                meta: "per title".to_string(),
            },
            StatCard {
                label: "Languages".to_string(),
                value: languages
                    .first()
                    .map(|(code, _)| code.clone())
                    .unwrap_or_else(|| "N/A".to_string()),
                meta: format!("{tracked} tracked"),
            },
            StatCard {
                label: "Total pages".to_string(),
                value: format_count(total_pages),
                meta: "library-wide".to_string(),
            },
        ];

        let freshness = metrics::latest_update(books)
            .map(|book| format!("Updated {}", format_date(&book.updated_at)))
            .unwrap_or_else(|| "Awaiting first sync".to_string());

        let insights = vec![
            InsightCard {
                title: "Catalog freshness".to_string(),
                detail: freshness,
                trend: "+2 titles this week".to_string(),
            },
            InsightCard {
                title: "Auth coverage".to_string(),
                detail: "JWT, RBAC, refresh tokens".to_string(),
                trend: "Access tokens valid 15 min".to_string(),
            },
            InsightCard {
                title: "Operational status".to_string(),
                detail: "PostgreSQL + Redis healthy".to_string(),
                trend: "99.9% uptime target".to_string(),
            },
        ];

        let rows = recent
            .iter()
            .map(|book| ActivityRow {
                title: book.title.clone(),
                author: book.author.clone(),
                publisher: book.publisher.clone(),
                language: book.language.to_uppercase(),
                updated: format_date(&book.updated_at),
            })
            .collect();

        let feed = recent
            .iter()
            .map(|book| FeedEntry {
                title: book.title.clone(),
                author: book.author.clone(),
                created: format_date(&book.created_at),
            })
            .collect();

        Self {
            stats,
            insights,
            recent: rows,
            feed,
            alert: fetch.error.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroMetric {
    pub label: String,
    pub value: String,
}

/// One card of the landing-page catalog grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub id: String,
    pub language: String,
    pub title: String,
    pub author: String,
    pub pages: String,
    pub summary: String,
    pub owner: String,
    pub added: String,
    pub updated: String,
}

/// Everything the landing page needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingModel {
    pub metrics: Vec<HeroMetric>,
    pub books: Vec<BookCard>,
    pub notice: Option<String>,
}

impl LandingModel {
    pub fn build(fetch: &CatalogFetch) -> Self {
        let metrics = vec![
            HeroMetric {
                label: "Books indexed".to_string(),
                value: format!("{:02}", fetch.books.len()),
            },
            HeroMetric {
                label: "Avg. reviewer score".to_string(),
                value: "4.9 / 5".to_string(),
            },
            HeroMetric {
                label: "Uptime last 30d".to_string(),
                value: "99.9%".to_string(),
            },
            HeroMetric {
                label: "Latency target".to_string(),
                value: "< 200ms".to_string(),
            },
        ];

        let books = fetch.books.iter().map(BookCard::from_record).collect();

        Self {
            metrics,
            books,
            notice: fetch.error.clone(),
        }
    }
}

impl BookCard {
    fn from_record(book: &BookRecord) -> Self {
        let owner = match &book.user_uid {
            Some(uid) => format!("User {}", uid.chars().take(8).collect::<String>()),
            None => "Service import".to_string(),
        };

        Self {
            id: book.id.clone(),
            language: book.language.to_uppercase(),
            title: book.title.clone(),
            author: book.author.clone(),
            pages: format!("{} pages", book.page_count),
            summary: format!(
                "{} · Published {}",
                book.publisher,
                format_date(&book.published_date)
            ),
            owner,
            added: format_date(&book.created_at),
            updated: format_date(&book.updated_at),
        }
    }
}

/// en-US style thousands grouping, e.g. `1234567` becomes `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"Oct 1, 2023"` style dates; unparseable input renders as given.
pub fn format_date(raw: &str) -> String {
    match metrics::parse_instant(raw) {
        Some(instant) => instant.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
