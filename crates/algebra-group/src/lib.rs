#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Algebra Group
//!
//! Finite groups built on [`algebra_core`]. A [`Group`] checks the group
//! axioms when it is constructed and then answers structural questions
//! from an indexed Cayley table.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`group`]: [`Group`], cosets, quotients, products, isomorphisms
//! - [`element`]: [`Element`], values bound to their group
//! - [`homomorphism`]: [`GroupHomomorphism`], kernels and images
//! - [`families`]: `Zn`, `Sn` and `Dn`

pub mod element;
pub mod error;
pub mod families;
pub mod group;
pub mod homomorphism;

mod proptests;

// Re-exports for convenience
pub use element::Element;
pub use error::{Error, Result};
pub use families::{DihedralElement, MAX_CONSTRUCTED_ORDER, Permutation, dn, sn, zn};
pub use group::Group;
pub use homomorphism::GroupHomomorphism;
