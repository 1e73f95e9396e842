//! Spotify application credentials, read from the environment.

use anyhow::{Context, Result};

/// Client credentials for the Spotify Web API application.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
}

impl Config {
    /// Read `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`. Both must be
    /// set; a missing variable fails the run up front rather than surfacing
    /// later as an opaque API error.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("SPOTIFY_CLIENT_ID")
            .context("SPOTIFY_CLIENT_ID is not set")?;
        let client_secret = std::env::var("SPOTIFY_CLIENT_SECRET")
            .context("SPOTIFY_CLIENT_SECRET is not set")?;

        Ok(Self {
            client_id,
            client_secret,
        })
    }
}
