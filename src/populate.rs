//! The playlist population loop, decoupled from the concrete API client.

use anyhow::Result;
use async_trait::async_trait;

/// The top search result for one query.
#[derive(Debug, Clone)]
pub struct FoundTrack {
    pub id: String,
    pub name: String,
}

/// The two catalog operations the loop needs. Implemented by
/// `SpotifyClient`; tests substitute a recording mock.
#[async_trait]
pub trait Catalog {
    /// Search the catalog, returning the single best match if any.
    async fn find_track(&self, query: &str) -> Result<Option<FoundTrack>>;

    /// Add one track to a playlist.
    async fn add_track(&self, playlist_id: &str, track_id: &str) -> Result<()>;
}

/// Run every query against the catalog in order, adding the top result to
/// the playlist. A query with no results prints a notice and is skipped;
/// any search or add error aborts the whole run — one bad line stops
/// processing of all subsequent lines. Returns the number of tracks added.
pub async fn populate_playlist<C: Catalog + ?Sized>(
    catalog: &C,
    playlist_id: &str,
    queries: &[String],
) -> Result<usize> {
    let mut added = 0;

    for query in queries {
        tracing::info!(query = %query, "Searching for track");

        match catalog.find_track(query).await? {
            None => println!("No tracks found for {query}"),
            Some(track) => {
                tracing::info!(track = %track.name, "Adding track");
                catalog.add_track(playlist_id, &track.id).await?;
                added += 1;
            }
        }
    }

    Ok(added)
}
