//! size_lru - interactive cache shell
//!
//! Reads JSON commands from stdin, one per line, and writes one JSON response
//! per line to stdout. Logs go to stderr.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use size_lru::shell::{self, Shell};
use size_lru::LruConfig;

/// Main entry point for the cache shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache with the configured limits
/// 4. Process commands until stdin closes
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "size_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = LruConfig::from_env();
    info!(
        "Configuration loaded: size_limit={}, ttl_ms={}",
        config.size_limit, config.ttl_ms
    );

    let mut shell = Shell::from_config(&config).context("failed to create cache")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let handled = shell::run(&mut shell, stdin.lock(), stdout.lock())
        .context("failed to process commands")?;

    let stats = shell.cache.stats();
    info!(
        handled,
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        "Shell finished"
    );
    Ok(())
}
