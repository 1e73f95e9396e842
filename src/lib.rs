//! Podcast-to-playlist tooling: extract track mentions from the podcast
//! feed, acquire a Spotify OAuth token, and fill a playlist from a curated
//! track list.

pub mod auth;
pub mod config;
pub mod extract;
pub mod feed;
pub mod logging;
pub mod populate;
pub mod spotify;
pub mod token;
