#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Algebra CLI
//!
//! The `algebra` binary prints Cayley tables, structural summaries and
//! isomorphisms of finite groups, and the basis tables and laws of the
//! Cayley-Dickson algebras.
//!
//! # Modules
//!
//! - [`cli`]: clap definitions
//! - [`commands`]: group and Cayley-Dickson handlers
//! - [`config`]: [`AlgebraConfig`] loading and validation
//! - [`config_handlers`]: `config` subcommands
//! - [`error`]: Error types and Result alias
//! - [`spec`]: [`GroupSpec`] parsing and construction

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod spec;

// Re-exports for convenience
pub use cli::{Cli, Command, ConfigAction};
pub use config::AlgebraConfig;
pub use error::{Error, Result};
pub use spec::GroupSpec;

/// Loads the configuration a parsed command runs with.
///
/// `config path`, `set` and `init` never read the loaded settings, so an
/// unreadable file falls back to defaults for them and can still be
/// located, repaired or replaced. Every other command reports the error.
pub fn load_config(cli: &Cli) -> Result<AlgebraConfig> {
    match AlgebraConfig::load(cli.config.as_deref()) {
        Ok(config) => Ok(config),
        Err(e) if cli.command.repairs_config() => {
            tracing::debug!(error = %e, "using defaults to run a config repair command");
            Ok(AlgebraConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Runs a parsed command and returns its output.
pub fn run(cli: &Cli, config: &AlgebraConfig) -> Result<String> {
    match &cli.command {
        Command::Table { group } => commands::table(group, config),
        Command::Info { group } => commands::info(group, config),
        Command::Iso { first, second } => commands::iso(first, second, config),
        Command::CdTable { algebra } => commands::cd_table(algebra, config),
        Command::CdLaws { algebra } => commands::cd_laws(algebra.as_deref(), config),
        Command::Config { action } => {
            config_handlers::handle_config_command(cli.config.as_deref(), action)
        }
    }
}
