//! Error types for algebra-cayley-dickson.

/// Errors raised by Cayley-Dickson numbers and basis tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error from algebra-core.
    #[error(transparent)]
    Core(#[from] algebra_core::Error),

    /// Error from algebra-group, e.g. when the unit elements fail to
    /// form a group.
    #[error(transparent)]
    Group(#[from] algebra_group::Error),

    /// A coefficient vector whose length is not a power of two.
    #[error("Coefficient count must be a power of two, got {len}")]
    InvalidDimension {
        /// Number of coefficients supplied
        len: usize,
    },

    /// A basis index past the dimension.
    #[error("Basis index {index} is out of range for dimension {dimension}")]
    InvalidIndex {
        /// Requested index
        index: usize,
        /// Dimension of the algebra
        dimension: usize,
    },

    /// A level above what the operation supports.
    #[error("Level {level} exceeds the limit of {limit}")]
    LevelTooLarge {
        /// Requested level
        level: u32,
        /// Largest supported level
        limit: u32,
    },

    /// Inversion of zero.
    #[error("Cannot invert zero")]
    ZeroDivisor,

    /// An algebra name that is neither a known name nor a level.
    #[error("Unknown algebra: {name}")]
    UnknownAlgebra {
        /// The unrecognised input
        name: String,
    },
}

/// Convenience `Result` type alias for Cayley-Dickson operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an unknown-algebra error.
    pub fn unknown_algebra<S: Into<String>>(name: S) -> Self {
        Error::UnknownAlgebra { name: name.into() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = Error::InvalidDimension { len: 3 };
        assert_eq!(err.to_string(), "Coefficient count must be a power of two, got 3");
    }

    #[test]
    fn test_group_error_is_transparent() {
        let inner = algebra_group::Error::IdentityCount { found: 0 };
        let err: Error = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_unknown_algebra() {
        assert_eq!(
            Error::unknown_algebra("biquaternion").to_string(),
            "Unknown algebra: biquaternion"
        );
    }
}
