//! Error types for algebra-cli.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for algebra-cli operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in algebra-cli.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from algebra-core.
    #[error("Core error: {0}")]
    Core(#[from] algebra_core::Error),

    /// Error from algebra-group.
    #[error("Group error: {0}")]
    Group(#[from] algebra_group::Error),

    /// Error from algebra-cayley-dickson.
    #[error("Cayley-Dickson error: {0}")]
    CayleyDickson(#[from] algebra_cayley_dickson::Error),

    /// Configuration could not be located, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error with the path that caused it.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A group description that does not parse.
    #[error("Invalid group spec: {0}")]
    InvalidSpec(String),

    /// A group larger than the configured limit.
    #[error("Group of order {order} exceeds the configured limit of {limit}")]
    OrderLimit {
        /// Order of the requested group
        order: usize,
        /// Configured `max_group_order`
        limit: usize,
    },

    /// A Cayley-Dickson level above the configured limit.
    #[error("Level {level} exceeds the configured limit of {limit}")]
    LevelLimit {
        /// Requested level
        level: u32,
        /// Configured `max_cd_level`
        limit: u32,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Wraps an I/O error together with its path.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates an invalid-spec error.
    pub fn invalid_spec<S: Into<String>>(message: S) -> Self {
        Error::InvalidSpec(message.into())
    }
}
