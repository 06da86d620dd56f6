//! Error types for algebra-core.

/// Errors raised while building or evaluating finite sets and functions.
///
/// Values that triggered an error are carried as their `Debug` rendering so
/// the enum stays free of type parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument was outside the accepted range.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// A function produced a value that is not in its declared codomain.
    #[error("Function returns a value outside of codomain: {value}")]
    ValueOutsideCodomain {
        /// The offending output value
        value: String,
    },

    /// A function was evaluated outside its domain.
    #[error("Function must be called on elements of the domain, got {value}")]
    NotInDomain {
        /// The offending input value
        value: String,
    },

    /// Composition of two functions whose domain and codomain disagree.
    #[error("The codomain of the inner function must match the domain of the outer")]
    DomainMismatch,
}

/// Convenience `Result` type alias for algebra-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a codomain violation for `value`.
    pub fn outside_codomain<V: std::fmt::Debug>(value: &V) -> Self {
        Error::ValueOutsideCodomain {
            value: format!("{value:?}"),
        }
    }

    /// Creates a domain violation for `value`.
    pub fn not_in_domain<V: std::fmt::Debug>(value: &V) -> Self {
        Error::NotInDomain {
            value: format!("{value:?}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("exponent must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid argument: exponent must be at least 1"
        );
    }

    #[test]
    fn test_outside_codomain_carries_debug_value() {
        let err = Error::outside_codomain(&(1, "a"));
        assert!(err.to_string().contains("value outside of codomain"));
        assert!(err.to_string().contains("(1, \"a\")"));
    }

    #[test]
    fn test_not_in_domain_display() {
        let err = Error::not_in_domain(&7);
        assert_eq!(
            err.to_string(),
            "Function must be called on elements of the domain, got 7"
        );
    }

    #[test]
    fn test_domain_mismatch_display() {
        assert!(Error::DomainMismatch.to_string().contains("must match the domain"));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
