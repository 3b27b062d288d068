// Campus chat-labels: resolve conversation display names from a snapshot

use clap::Parser;
use std::io::Write;
use tracing::error;

use campus_app::{execute, init_tracing, Cli};
use campus_common::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    init_tracing(&config);

    let output = execute(&cli, &config, std::io::stdin().lock()).map_err(|e| {
        error!("Failed to resolve conversation labels: {:#}", e);
        e
    })?;

    std::io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
