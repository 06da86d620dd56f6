//! Command-line definitions.

use crate::spec::GroupSpec;
use clap::{Parser, Subcommand};

/// Explore finite groups and Cayley-Dickson algebras.
#[derive(Parser, Debug)]
#[command(name = "algebra")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, env = "ALGEBRA_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the Cayley table of a group (z6, s3, d4, q8, units:2, z2xz2, ...)
    Table {
        /// Group spec
        group: GroupSpec,
    },

    /// Summarise the structure of a group
    Info {
        /// Group spec
        group: GroupSpec,
    },

    /// Search for an isomorphism between two groups
    Iso {
        /// Domain group spec
        first: GroupSpec,
        /// Codomain group spec
        second: GroupSpec,
    },

    /// Print the basis multiplication table of a Cayley-Dickson algebra
    CdTable {
        /// Level or name (e.g. 2, quaternion, octonions)
        algebra: String,
    },

    /// Show which laws hold in a Cayley-Dickson algebra
    CdLaws {
        /// Level or name; omit for a summary of every level
        algebra: Option<String>,
    },

    /// Inspect or create the configuration file
    Config {
        /// Config subcommand to run
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Command {
    /// Returns `true` for `config` subcommands that work on the file itself
    /// and not on the loaded settings.
    pub fn repairs_config(&self) -> bool {
        matches!(
            self,
            Command::Config {
                action: ConfigAction::Path | ConfigAction::Set { .. } | ConfigAction::Init { .. }
            }
        )
    }
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,

    /// Print the effective configuration
    Show,

    /// Print one value by dotted key
    Get {
        /// Key such as `max_group_order`
        key: String,
    },

    /// Set one value by dotted key
    Set {
        /// Key such as `symbols`
        key: String,
        /// New value
        value: String,
    },

    /// Write a default configuration file
    Init {
        /// Write here instead of the default location
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
