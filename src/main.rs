//! Phonebook - Main entry point
//!
//! Loads the sample entries, prompts for a single query on stdin, and prints
//! the matching entries to stdout.

use anyhow::Result;
use phonebook::seed::SAMPLE_ENTRIES;
use phonebook::{app, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr so stdout only carries the prompt and results
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Configuration loaded: seed_samples={}, seed_policy={:?}, output={:?}",
        config.seed_samples, config.seed_policy, config.output_format
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    if let Err(e) = app::run(
        &config,
        SAMPLE_ENTRIES,
        stdin.lock(),
        &mut stdout,
        &mut stderr,
    ) {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
