//! Dev blog feed renderer
//!
//! Queries the blog's Sanity dataset for posts and renders the listing into
//! the `#posts` element of a static HTML page.
//! Uses ports & adapters so the render pipeline can run against any page.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod render;



use adapters::{HtmlPage, SanityClient};
use app::{FeedRenderService, RenderOutcome, RenderSettings};
use config::Config;

/// Render the blog's post listing into an HTML page
#[derive(Parser, Debug)]
#[command(name = "devblog-feed", version, about)]
struct Cli {
    /// HTML page containing the posts container
    #[arg(env = "FEED_PAGE")]
    page: PathBuf,

    /// Where to write the rendered page (stdout when omitted)
    #[arg(short, long, env = "FEED_OUTPUT")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Loads `.env` first so RUST_LOG and clap's env fallbacks see it too
    let config = Config::from_env();

    // Initialize tracing to stderr (stdout may carry the rendered page)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,devblog_feed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let client = Arc::new(SanityClient::new(&config));
    tracing::info!("Querying {}", client.query_url());

    let service = FeedRenderService::new(client, RenderSettings::from_config(&config));

    let mut page = HtmlPage::load(&cli.page)
        .await
        .with_context(|| format!("Failed to load page {}", cli.page.display()))?;

    match service.render(&mut page).await {
        RenderOutcome::Populated(count) => tracing::info!("Rendered {} posts", count),
        outcome => tracing::info!(?outcome, "Feed rendered without posts"),
    }

    match &cli.output {
        Some(path) => page
            .save(path)
            .await
            .with_context(|| format!("Failed to save page {}", path.display()))?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(page.to_html().as_bytes())
                .await
                .context("Failed to write page to stdout")?;
            stdout.flush().await.context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
