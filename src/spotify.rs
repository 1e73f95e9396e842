//! Spotify API client wrapper.

use anyhow::{Context, Result};
use async_trait::async_trait;
use rspotify::{
    model::{PlayableId, PlaylistId, PrivateUser, SearchResult, SearchType, TrackId},
    prelude::*,
    AuthCodeSpotify, Token,
};

use crate::populate::{Catalog, FoundTrack};

/// A freshly created playlist, reduced to what the populator needs.
#[derive(Debug, Clone)]
pub struct CreatedPlaylist {
    pub id: String,
    pub name: String,
}

/// Authenticated Spotify client with explicit token handling: the caller
/// installs a token, and refresh is a visible refresh-or-fail step rather
/// than something hidden inside the transport.
pub struct SpotifyClient {
    client: AuthCodeSpotify,
}

impl SpotifyClient {
    pub fn new(client: AuthCodeSpotify) -> Self {
        Self { client }
    }

    pub async fn set_token(&self, token: Token) {
        *self.client.token.lock().await.unwrap() = Some(token);
    }

    /// Refresh the access token if it has expired (or no expiry is known).
    /// Returns the refreshed token so the caller can persist it; `None`
    /// means the current token is still good.
    pub async fn refresh_if_expired(&self) -> Result<Option<Token>> {
        let expired = self
            .client
            .token
            .lock()
            .await
            .unwrap()
            .as_ref()
            .map_or(true, Token::is_expired);
        if !expired {
            return Ok(None);
        }

        tracing::info!("Access token expired, refreshing");
        self.client
            .refresh_token()
            .await
            .context("failed to refresh access token")?;

        let refreshed = self
            .client
            .token
            .lock()
            .await
            .unwrap()
            .clone()
            .context("no token present after refresh")?;

        tracing::info!("Token refreshed successfully");
        Ok(Some(refreshed))
    }

    pub async fn current_user(&self) -> Result<PrivateUser> {
        self.client.me().await.context("failed to get current user")
    }

    /// Create a private, non-collaborative playlist with an empty
    /// description. Either the playlist exists fully configured afterwards
    /// or the call fails before any tracks are added.
    pub async fn create_playlist(&self, user: &PrivateUser, name: &str) -> Result<CreatedPlaylist> {
        tracing::debug!(user_id = %user.id, name, "API: user_playlist_create");
        let playlist = self
            .client
            .user_playlist_create(user.id.clone(), name, Some(false), Some(false), Some(""))
            .await
            .context("failed to create playlist")?;

        Ok(CreatedPlaylist {
            id: playlist.id.id().to_string(),
            name: playlist.name,
        })
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn find_track(&self, query: &str) -> Result<Option<FoundTrack>> {
        tracing::debug!(query, "API: search");
        let result = self
            .client
            .search(query, SearchType::Track, None, None, Some(1), None)
            .await
            .context("failed to search for track")?;

        let SearchResult::Tracks(page) = result else {
            return Ok(None);
        };

        Ok(page.items.into_iter().next().and_then(|track| {
            track.id.map(|id| FoundTrack {
                id: id.id().to_string(),
                name: track.name,
            })
        }))
    }

    async fn add_track(&self, playlist_id: &str, track_id: &str) -> Result<()> {
        let playlist = PlaylistId::from_id(playlist_id)?;
        let track = TrackId::from_id(track_id)?;

        tracing::debug!(playlist_id, track_id, "API: playlist_add_items");
        self.client
            .playlist_add_items(playlist, [PlayableId::Track(track)], None)
            .await
            .context("failed to add track to playlist")?;

        Ok(())
    }
}
