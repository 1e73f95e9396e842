//! Feed extractor: fetch the podcast feed and print every track mention
//! from the episode summaries, one per line.

use anyhow::Result;

use dancefloor::{extract, feed, logging};

const FEED_URL: &str = "https://cloud.mave.digital/36700";

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Error");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let client = reqwest::Client::new();

    let body = feed::fetch_feed(&client, FEED_URL).await?;
    let episodes = feed::parse_feed(&body)?;
    tracing::debug!(count = episodes.len(), "Parsed feed");

    for episode in &episodes {
        for track in extract::extract_tracks(&episode.summary) {
            println!("{track}");
        }
    }

    Ok(())
}
