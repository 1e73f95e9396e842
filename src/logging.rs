//! Tracing setup shared by the three binaries.
//!
//! Logs go to stderr: the feed extractor's stdout is its data output (one
//! track per line), so diagnostics must never share it.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize the logging system.
///
/// The log level can be controlled via the `RUST_LOG` environment variable.
///
/// Default log levels:
/// - `dancefloor` modules: DEBUG
/// - `rspotify`: INFO
/// - Other crates: WARN
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dancefloor=debug,rspotify=info,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))?;

    Ok(())
}
