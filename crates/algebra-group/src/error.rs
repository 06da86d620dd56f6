//! Error types for algebra-group.

/// Errors raised while validating or manipulating finite groups.
///
/// Group axiom violations are permanent: the same inputs always fail the
/// same way. Each variant names the axiom or precondition that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error from algebra-core (function evaluation, set arguments).
    #[error(transparent)]
    Core(#[from] algebra_core::Error),

    /// The binary operation's codomain is not the element set.
    #[error("The binary operation must have the elements as its codomain")]
    CodomainMismatch,

    /// The binary operation's domain is not the set of element pairs.
    #[error("The binary operation must have all element pairs as its domain")]
    DomainMismatch,

    /// Some triple violates `a(bc) = (ab)c`.
    #[error("The binary operation is not associative: {triple}")]
    NotAssociative {
        /// The first failing triple
        triple: String,
    },

    /// Zero or several left identities were found.
    #[error("There must be one identity element, found {found}")]
    IdentityCount {
        /// Number of identities found
        found: usize,
    },

    /// Some elements have no inverse.
    #[error("Some elements are missing inverses: {elements}")]
    MissingInverses {
        /// The elements without an inverse
        elements: String,
    },

    /// The explicit presentation order is not a permutation of the elements.
    #[error("The ordered and unordered elements do not match")]
    OrderMismatch,

    /// A value was used with a group it does not belong to.
    #[error("The element is not in the group: {value}")]
    NotInGroup {
        /// The offending value
        value: String,
    },

    /// An abelian-only operation was applied to a non-abelian group.
    #[error("{message}")]
    NotAbelian {
        /// Which abelian-only operation was attempted
        message: &'static str,
    },

    /// A quotient was requested by a subgroup that is not normal.
    #[error("The divisor must be a normal subgroup")]
    NotNormal,

    /// `generate` was called with no generators.
    #[error("Generators must contain at least one element")]
    EmptyGenerators,

    /// A map between groups does not respect the operations.
    #[error("The function does not satisfy the homomorphism axioms: {pair}")]
    NotHomomorphism {
        /// The first failing pair
        pair: String,
    },

    /// A map's domain or codomain does not match the groups it joins.
    #[error("The map must go from the domain group's elements to the codomain group's elements")]
    MapMismatch,

    /// A family member would exceed the construction limit.
    #[error("Group of order {order} exceeds the limit of {limit}")]
    TooLarge {
        /// Order of the requested group
        order: usize,
        /// Largest order allowed
        limit: usize,
    },
}

/// Convenience `Result` type alias for group operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a not-in-group error for `value`.
    pub fn not_in_group<V: std::fmt::Debug>(value: &V) -> Self {
        Error::NotInGroup {
            value: format!("{value:?}"),
        }
    }

    /// Creates an invalid-argument error (delegates to algebra-core).
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Error::Core(algebra_core::Error::invalid_argument(message))
    }
}
