//! HTTP surface: two routes, both rendered per request from a fresh
//! catalog fetch.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use bookdash_catalog::CatalogClient;
use bookdash_core::{DashboardModel, LandingModel};
use tracing::debug;

use crate::render::{self, ExternalLinks};

#[derive(Debug, Clone)]
struct AppState {
    client: Arc<CatalogClient>,
    links: ExternalLinks,
}

pub fn router(client: CatalogClient) -> Router {
    let state = AppState {
        links: ExternalLinks::for_client(&client),
        client: Arc::new(client),
    };
    Router::new()
        .route("/", get(landing))
        .route("/dashboard", get(dashboard))
        .with_state(state)
}

async fn landing(State(state): State<AppState>) -> Html<String> {
    let fetch = state.client.fetch_catalog().await;
    debug!(
        n_books = fetch.books.len(),
        fallback = fetch.is_fallback(),
        "rendering landing page"
    );
    let model = LandingModel::build(&fetch);
    Html(render::landing_page(&model, &state.links))
}

async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let fetch = state.client.fetch_catalog().await;
    debug!(
        n_books = fetch.books.len(),
        fallback = fetch.is_fallback(),
        "rendering dashboard"
    );
    let model = DashboardModel::build(&fetch);
    Html(render::dashboard_page(&model, &state.links))
}
