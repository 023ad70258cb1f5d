//! Bookdash: server-rendered marketing and operations views for the
//! Books catalog.
//!
//! Every request fetches the catalog fresh; when the API is down the
//! pages render from the curated fallback dataset with a visible notice,
//! so the UI never comes up empty.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use bookdash_catalog::{CatalogClient, CatalogClientConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;
mod server;

#[derive(Debug, Parser)]
#[command(
    name = "bookdash",
    about = "Landing page and operations dashboard for the Books catalog"
)]
struct Args {
    /// Address to serve on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let config = CatalogClientConfig::from_env();
    info!(base_url = %config.base_url, "starting bookdash");

    let client =
        CatalogClient::new(config).context("failed to construct the catalog client")?;

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;
    info!(addr = %args.listen, "listening");

    axum::serve(listener, server::router(client))
        .await
        .context("server exited")?;
    Ok(())
}

fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
