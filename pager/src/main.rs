//! Gingrsnap feed pager
//!
//! Pages through one Gingrsnap feed (activity events or recipes) the way the
//! "load more" control does, then prints the rendered list.
//! Configuration comes from the environment (see `Config::from_env`);
//! logs go to stderr so stdout carries only the HTML.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use gingrsnap_web::app::FeedEntry;
use gingrsnap_web::{
    Config, FeedContext, FeedError, FeedEvent, FeedKind, FeedList, FeedPager, FeedRecipe,
    HttpFeedSource, LoadOutcome, PageCursor,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for the rendered feed)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gingrsnap_web=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(feed = %config.feed, base_url = %config.base_url, "Starting Gingrsnap pager");

    let source = Arc::new(
        HttpFeedSource::from_config(&config).context("Failed to build HTTP client")?,
    );

    let html = match config.feed {
        FeedKind::Events => run::<FeedEvent>(source, &config).await?,
        FeedKind::Recipes => run::<FeedRecipe>(source, &config).await?,
    };

    println!("{}", html);

    Ok(())
}

async fn run<I: FeedEntry>(source: Arc<HttpFeedSource>, config: &Config) -> Result<String> {
    let start = match config.start_cursor {
        Some(millis) => PageCursor::from_millis(millis)
            .with_context(|| format!("Start cursor out of range: {}", millis))?,
        None => PageCursor::new(Utc::now()),
    };

    let pager: Arc<FeedPager<HttpFeedSource, I>> = Arc::new(FeedPager::new(
        source,
        FeedContext::from_config(config),
        FeedList::resume_after(start),
    ));

    let on_interrupt = {
        let pager = pager.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupted, cancelling page request");
                pager.dispose();
            }
        })
    };

    for page in 1..=config.max_pages {
        match pager.load_more().await {
            Ok(LoadOutcome::Appended(count)) => {
                tracing::info!(page, count, "Loaded page");
            }
            Ok(LoadOutcome::Exhausted) => {
                tracing::info!(page, "No more items");
                break;
            }
            Ok(LoadOutcome::AlreadyLoading) => {}
            Err(e) if e.is_retryable() => {
                tracing::warn!(page, "Page failed, stopping: {}", e);
                break;
            }
            Err(FeedError::Cancelled) => break,
            Err(e) => {
                on_interrupt.abort();
                return Err(e).context("Failed to load feed page");
            }
        }
    }
    on_interrupt.abort();

    pager
        .render(Utc::now())
        .context("Failed to render feed")
}
