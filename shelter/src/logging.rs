//! Development-time tracing for the shelter session.
//!
//! Diagnostics go to stderr only. Stdout carries the interactive protocol, so
//! nothing logged here can interleave with prompts or answers.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Output is compact
/// and goes to stderr.
///
/// # Example
/// ```bash
/// RUST_LOG=shelter=debug cargo run
/// ```
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|err| anyhow!("install tracing subscriber: {err}"))
}
