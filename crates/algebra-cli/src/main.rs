//! `algebra` binary.

#![forbid(unsafe_code)]

use algebra_cli::{Cli, load_config, run};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn filter_for(verbose: u8, configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => configured.into(),
        1 => "info".into(),
        2 => "debug".into(),
        _ => "trace".into(),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli).context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(cli.verbose, &config.log_level))
        .with_writer(std::io::stderr)
        .init();

    let output = run(&cli, &config)?;
    println!("{output}");
    Ok(())
}
