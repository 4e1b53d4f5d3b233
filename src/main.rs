//! Cache Shell - an interactive test shell for an in-memory key-value cache
//!
//! Reads commands from the console, one per line, and drives a single-node
//! string store: put/get/remove/list/size plus bulk synthetic fills.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache_shell::{Config, Shell};

/// Main entry point for the cache shell.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the store and the interactive shell around it
/// 4. Run the read-parse-dispatch-print loop until exit or end of input
fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cache_shell=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        cache_name = %config.cache_name,
        seeded = config.fill_seed.is_some(),
        "configuration loaded"
    );

    let mut shell = Shell::new(config);
    shell.run()?;

    info!("cache shell terminated");
    Ok(())
}
