#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Algebra Core
//!
//! Finite sets, total functions between them, and the plain-text table
//! renderer shared by the rest of the workspace. This crate has no internal
//! dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`set`]: [`FiniteSet`], an ordered immutable set
//! - [`function`]: [`Function`], a finite map with a declared codomain
//! - [`table`]: Cayley-table rendering

pub mod error;
pub mod function;
pub mod set;
pub mod table;

mod proptests;

use std::fmt::Debug;

// Re-exports for convenience
pub use error::{Error, Result};
pub use function::Function;
pub use set::FiniteSet;

/// Bound shared by every value stored in a finite structure.
///
/// Values are ordered so sets iterate deterministically, cloned out of
/// lookup tables, and debug-printed into error messages.
pub trait Value: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Value for T {}
