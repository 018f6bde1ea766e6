//! linkdeck: a curated link directory with local additions.
//!
//! Usage:
//!   linkdeck list -c design -q figma
//!   linkdeck add --title Raycast --url https://raycast.com -c tool
//!   linkdeck export -o resources.json
//!
//! Built-in entries ship with the binary; user entries live in the data dir.

use anyhow::Result;
use clap::Parser;
use linkdeck_cli::{execute, Cli};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let fallback = if cli.verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let config = cli.resolve_config()?;
    debug!("Using data dir {}", config.data_dir.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &config, &mut out).await
}
