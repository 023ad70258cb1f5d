//! HTML rendering for the two pages.
//!
//! Plain string assembly. The view models arrive pre-formatted, so this
//! module only places values, escapes them, and wires the external links.

use bookdash_catalog::CatalogClient;
use bookdash_core::view::{DashboardModel, LandingModel};

/// Links out of the app: API docs and the auth endpoints. The UI only
/// links to these, it never handles credentials.
#[derive(Debug, Clone)]
pub struct ExternalLinks {
    pub docs_url: String,
    pub login_url: String,
    pub api_base: String,
}

impl ExternalLinks {
    pub fn for_client(client: &CatalogClient) -> Self {
        Self {
            docs_url: client.docs_url(),
            login_url: client.login_url(),
            api_base: client.base_url().trim_end_matches('/').to_string(),
        }
    }
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn alert_banner(message: Option<&str>) -> String {
    match message {
        Some(message) => format!("<div class=\"alert\">{}</div>\n", escape(message)),
        None => String::new(),
    }
}

pub fn landing_page(model: &LandingModel, links: &ExternalLinks) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<header class=\"page-header\">\n\
         <span class=\"logo\">Books Platform</span>\n\
         <nav class=\"nav-links\">\n\
         <a href=\"/dashboard\">Dashboard</a>\n\
         <a href=\"#books\">Catalog</a>\n\
         <a href=\"{docs}\">API Docs</a>\n\
         </nav>\n\
         <a class=\"cta-button login-button\" href=\"{login}\">User login</a>\n\
         </header>\n",
        docs = escape(&links.docs_url),
        login = escape(&links.login_url),
    ));

    body.push_str(
        "<section class=\"hero\">\n\
         <p class=\"badge\">Full-stack reference</p>\n\
         <h1>Showcase a production-ready book platform</h1>\n\
         <p>Secure catalog services meet a server-rendered dashboard. Review real \
         catalog data, spotlight stability metrics, and guide teammates straight to \
         the right docs.</p>\n",
    );
    body.push_str(&format!(
        "<div class=\"hero__cta\">\n\
         <a class=\"cta-button primary\" href=\"/dashboard\">View dashboard</a>\n\
         <a class=\"cta-button secondary\" href=\"{docs}\">API docs</a>\n\
         <a class=\"cta-button outline\" href=\"{login}\">User login</a>\n\
         </div>\n",
        docs = escape(&links.docs_url),
        login = escape(&links.login_url),
    ));

    body.push_str("<div class=\"hero__metrics\">\n");
    for metric in &model.metrics {
        body.push_str(&format!(
            "<div class=\"metric-card\"><span>{}</span><strong>{}</strong></div>\n",
            escape(&metric.label),
            escape(&metric.value),
        ));
    }
    body.push_str("</div>\n</section>\n");

    body.push_str(&format!(
        "<section class=\"catalog\" id=\"books\">\n\
         <div class=\"section-heading\">\n<h2>Catalog</h2>\n</div>\n{}",
        alert_banner(model.notice.as_deref()),
    ));

    if model.books.is_empty() {
        body.push_str(&format!(
            "<div class=\"empty-state\">\n<h3>No books yet</h3>\n\
             <p>POST a book to <code>{}/books/</code> and refresh to watch it appear.</p>\n\
             </div>\n",
            escape(&links.api_base),
        ));
    } else {
        body.push_str("<div class=\"books-grid\">\n");
        for book in &model.books {
            body.push_str(&format!(
                "<article class=\"book-card\">\n\
                 <header>\n\
                 <div class=\"badge\">{language}</div>\n\
                 <h3>{title}</h3>\n\
                 <span>by {author}</span>\n\
                 <span class=\"tag\">{pages}</span>\n\
                 </header>\n\
                 <p class=\"book-description\">{summary}</p>\n\
                 <div class=\"book-meta\">\n\
                 <span>Owner: <strong>{owner}</strong></span>\n\
                 <span>Added: <strong>{added}</strong></span>\n\
                 </div>\n\
                 <footer class=\"book-footer\">\n\
                 <span>Updated {updated}</span>\n\
                 <a class=\"book-link\" href=\"{inspect}\">Inspect record &rarr;</a>\n\
                 </footer>\n\
                 </article>\n",
                language = escape(&book.language),
                title = escape(&book.title),
                author = escape(&book.author),
                pages = escape(&book.pages),
                summary = escape(&book.summary),
                owner = escape(&book.owner),
                added = escape(&book.added),
                updated = escape(&book.updated),
                inspect = escape(&format!("{}/books/{}", links.api_base, book.id)),
            ));
        }
        body.push_str("</div>\n");
    }
    body.push_str("</section>\n");

    page_shell("Books Platform", &body)
}

pub fn dashboard_page(model: &DashboardModel, links: &ExternalLinks) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<section class=\"dashboard-hero\">\n\
         <p class=\"badge\">Operations view</p>\n\
         <h1>Books Platform dashboard</h1>\n\
         <p>Track catalog metrics, inspect recent imports, and jump directly into \
         the API docs when something needs attention.</p>\n\
         <div class=\"dashboard-cta\">\n\
         <a class=\"cta-button secondary\" href=\"/\">Back to marketing</a>\n\
         <a class=\"cta-button primary\" href=\"{docs}\">Open API docs</a>\n\
         </div>\n\
         </section>\n",
        docs = escape(&links.docs_url),
    ));

    body.push_str("<section class=\"stats-grid\">\n");
    for stat in &model.stats {
        body.push_str(&format!(
            "<article class=\"stat-card\"><span>{}</span><strong>{}</strong><p>{}</p></article>\n",
            escape(&stat.label),
            escape(&stat.value),
            escape(&stat.meta),
        ));
    }
    body.push_str("</section>\n");

    body.push_str("<section class=\"insights-grid\">\n");
    for insight in &model.insights {
        body.push_str(&format!(
            "<article class=\"insight-card\">\
             <p class=\"insight-title\">{}</p><h3>{}</h3><span class=\"trend\">{}</span>\
             </article>\n",
            escape(&insight.title),
            escape(&insight.detail),
            escape(&insight.trend),
        ));
    }
    body.push_str("</section>\n");

    body.push_str(&format!(
        "<section class=\"table-section\">\n\
         <div class=\"section-heading\">\n<h2>Recent book activity</h2>\n</div>\n{}",
        alert_banner(model.alert.as_deref()),
    ));
    if model.recent.is_empty() {
        body.push_str("<p class=\"text-subtle\">No activity yet. Add books via the API to populate.</p>\n");
    } else {
        body.push_str(
            "<table class=\"data-table\">\n<thead><tr>\
             <th>Title</th><th>Author</th><th>Publisher</th><th>Language</th><th>Updated</th>\
             </tr></thead>\n<tbody>\n",
        );
        for row in &model.recent {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&row.title),
                escape(&row.author),
                escape(&row.publisher),
                escape(&row.language),
                escape(&row.updated),
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }
    body.push_str("</section>\n");

    body.push_str(
        "<section class=\"activity-feed\">\n\
         <div class=\"section-heading\">\n<h2>Activity feed</h2>\n</div>\n<ul>\n",
    );
    if model.feed.is_empty() {
        body.push_str("<li>No events yet.</li>\n");
    } else {
        for entry in &model.feed {
            body.push_str(&format!(
                "<li><div><strong>{}</strong><span> by {}</span></div><span>{}</span></li>\n",
                escape(&entry.title),
                escape(&entry.author),
                escape(&entry.created),
            ));
        }
    }
    body.push_str("</ul>\n</section>\n");

    page_shell("Books Platform dashboard", &body)
}
