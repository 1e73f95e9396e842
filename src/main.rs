//! Playlist populator: read the saved token and `tracks.txt`, create the
//! playlist, and fill it one search at a time.

use std::path::Path;

use anyhow::{Context, Result};

use dancefloor::config::Config;
use dancefloor::populate::populate_playlist;
use dancefloor::spotify::SpotifyClient;
use dancefloor::token::{self, StoredToken, TOKEN_FILE};
use dancefloor::{auth, logging};

const PLAYLIST_NAME: &str = "Один Дома «Разрыв танцполов»";
const TRACKS_FILE: &str = "tracks.txt";

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    tracing::info!("Starting...");

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Error");
        std::process::exit(1);
    }

    tracing::info!("Done.");
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;

    let stored = token::load(Path::new(TOKEN_FILE))?;
    let spotify = auth::build_client(&config, auth::random_state());
    let client = SpotifyClient::new(spotify);
    client.set_token(stored.into_token(auth::scope_set())).await;

    if let Some(refreshed) = client.refresh_if_expired().await? {
        token::save(Path::new(TOKEN_FILE), &StoredToken::from_token(&refreshed))?;
        tracing::debug!("Refreshed token persisted");
    }

    let user = client.current_user().await?;
    tracing::info!(
        user_id = %user.id,
        "Logged in as {}",
        user.display_name.as_deref().unwrap_or("(no display name)")
    );

    tracing::info!("Creating playlist...");
    let playlist = client.create_playlist(&user, PLAYLIST_NAME).await?;
    tracing::info!(playlist_id = %playlist.id, "Created playlist {}", playlist.name);

    tracing::info!("Reading tracks from file...");
    let queries: Vec<String> = std::fs::read_to_string(TRACKS_FILE)
        .context("failed to open tracks file")?
        .lines()
        .map(str::to_string)
        .collect();

    let added = populate_playlist(&client, &playlist.id, &queries).await?;
    tracing::info!(added, total = queries.len(), "Playlist populated");

    Ok(())
}
