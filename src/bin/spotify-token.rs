//! Token acquirer: one leg of the OAuth authorization-code flow. Prints
//! the authorization URL, waits for the redirect callback on a local
//! listener, exchanges the code, writes `token.json`, and exits.

use std::path::Path;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use rspotify::prelude::*;
use rspotify::AuthCodeSpotify;
use serde::Deserialize;

use dancefloor::config::Config;
use dancefloor::token::{StoredToken, TOKEN_FILE};
use dancefloor::{auth, logging, token};

#[derive(Clone)]
struct CallbackState {
    spotify: AuthCodeSpotify,
    expected_state: String,
}

#[derive(Debug, Deserialize)]
struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

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

    let state = auth::random_state();
    let spotify = auth::build_client(&config, state.clone());
    let url = spotify
        .get_authorize_url(false)
        .context("failed to build authorization url")?;

    println!("Please log in to Spotify by visiting the following page in your browser: {url}");

    let app = Router::new()
        .route(auth::CALLBACK_PATH, get(callback))
        .with_state(CallbackState {
            spotify,
            expected_state: state,
        });

    // Blocks forever if the user never completes the browser flow; the
    // success path exits from inside the handler.
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", auth::CALLBACK_PORT))
        .await
        .context("failed to bind callback listener")?;
    axum::serve(listener, app)
        .await
        .context("callback server failed")?;

    Ok(())
}

/// The only route served. Failure paths respond 403 and leave the listener
/// up for a retried callback; only a persisted token ends the process.
async fn callback(
    State(ctx): State<CallbackState>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    if query.state.as_deref() != Some(ctx.expected_state.as_str()) {
        tracing::warn!("Callback state mismatch");
        return (StatusCode::FORBIDDEN, "State mismatch").into_response();
    }

    if let Some(error) = query.error {
        tracing::warn!(error = %error, "Authorization denied");
        return (StatusCode::FORBIDDEN, "Authorization denied").into_response();
    }

    let Some(code) = query.code else {
        tracing::warn!("Callback without authorization code");
        return (StatusCode::FORBIDDEN, "Missing authorization code").into_response();
    };

    if let Err(e) = ctx.spotify.request_token(&code).await {
        tracing::warn!(error = %e, "Couldn't get token");
        return (StatusCode::FORBIDDEN, "Couldn't get token").into_response();
    }

    let Some(acquired) = ctx.spotify.token.lock().await.unwrap().clone() else {
        tracing::warn!("Token exchange returned no token");
        return (StatusCode::FORBIDDEN, "Couldn't get token").into_response();
    };

    if let Err(e) = token::save(Path::new(TOKEN_FILE), &StoredToken::from_token(&acquired)) {
        tracing::warn!(error = %e, "Couldn't save token");
        return (StatusCode::FORBIDDEN, "Couldn't save token").into_response();
    }

    tracing::info!("Token saved to {TOKEN_FILE}");
    std::process::exit(0);
}
