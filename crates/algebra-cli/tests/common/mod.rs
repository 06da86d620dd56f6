//! Shared helpers for algebra-cli integration tests.

use algebra_cli::{AlgebraConfig, Cli, Result, run};
use clap::Parser;

/// Parses `args` (without the binary name) and runs them.
pub fn run_args(args: &[&str], config: &AlgebraConfig) -> Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("algebra").chain(args.iter().copied()))
        .expect("arguments should parse");
    run(&cli, config)
}

/// Runs with the default configuration.
pub fn run_default(args: &[&str]) -> Result<String> {
    run_args(args, &AlgebraConfig::default())
}
