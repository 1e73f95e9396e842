//! Podcast feed fetching and parsing.

use anyhow::{bail, Context, Result};
use feed_rs::model::Entry;

/// One feed item, reduced to the fields the extractor cares about.
#[derive(Debug, Clone)]
pub struct Episode {
    pub title: String,
    pub summary: String,
}

/// GET the feed and return its raw body. Any non-2xx status is an error;
/// there are no retries and no conditional requests.
pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .await
        .context("failed to get feed")?;

    let status = response.status();
    if !status.is_success() {
        bail!("unexpected status code fetching feed: {status}");
    }

    let body = response
        .bytes()
        .await
        .context("failed to read feed body")?;

    Ok(body.to_vec())
}

/// Parse a raw RSS/Atom document into episodes, in feed order.
pub fn parse_feed(raw: &[u8]) -> Result<Vec<Episode>> {
    let feed = feed_rs::parser::parse(raw).context("failed to parse feed xml")?;
    Ok(feed.entries.iter().map(episode_from_entry).collect())
}

fn episode_from_entry(entry: &Entry) -> Episode {
    let title = entry
        .title
        .as_ref()
        .map(|text| text.content.clone())
        .unwrap_or_default();
    // An item without a summary still parses; it just has nothing to match.
    let summary = entry
        .summary
        .as_ref()
        .map(|text| text.content.clone())
        .or_else(|| entry.content.as_ref().and_then(|content| content.body.clone()))
        .unwrap_or_default();

    Episode { title, summary }
}
