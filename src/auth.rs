//! OAuth client construction for the authorization-code flow.

use rand::distributions::Alphanumeric;
use rand::Rng;
use rspotify::{scopes, AuthCodeSpotify, Config as RspotifyConfig, Credentials, OAuth};

use crate::config::Config;

pub const SPOTIFY_REDIRECT_URI: &str = "http://localhost/spotify-callback";
pub const CALLBACK_PATH: &str = "/spotify-callback";
pub const CALLBACK_PORT: u16 = 80;

const STATE_LENGTH: usize = 16;

/// The three scopes the toolkit needs: read the user profile, read private
/// playlists, modify private playlists.
pub fn scope_set() -> std::collections::HashSet<String> {
    scopes!(
        "user-read-private",
        "playlist-read-private",
        "playlist-modify-private"
    )
}

/// Random anti-forgery state for one authorization attempt: 16 characters
/// drawn uniformly from the 62-character alphanumeric alphabet. Generated
/// once, compared once against the callback, never persisted.
pub fn random_state() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Build an authorization-code client from app credentials.
///
/// Token caching and automatic refreshing stay off: `token.json` handling
/// and the refresh-or-fail decision live in this crate, not in the SDK.
pub fn build_client(config: &Config, state: String) -> AuthCodeSpotify {
    let credentials = Credentials::new(&config.client_id, &config.client_secret);
    let oauth = OAuth {
        redirect_uri: SPOTIFY_REDIRECT_URI.to_string(),
        scopes: scope_set(),
        state,
        ..Default::default()
    };

    AuthCodeSpotify::with_config(
        credentials,
        oauth,
        RspotifyConfig {
            token_cached: false,
            token_refreshing: false,
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_sixteen_alphanumeric_chars() {
        let state = random_state();
        assert_eq!(state.len(), 16);
        assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn states_differ_between_attempts() {
        assert_ne!(random_state(), random_state());
    }
}
