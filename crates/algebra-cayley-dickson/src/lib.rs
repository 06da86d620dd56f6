#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Algebra Cayley-Dickson
//!
//! The Cayley-Dickson doubling construction over any signed scalar:
//! ℝ → ℂ → ℍ → 𝕆 → 𝕊 → …
//!
//! Each doubling loses a law. Quaternions stop being commutative,
//! octonions stop being associative, and sedenions stop being alternative.
//! [`BasisTable`] and [`Laws`] make that loss checkable, and
//! [`unit_group`] turns the low levels into finite groups.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`number`]: [`CayleyDickson`] numbers and arithmetic
//! - [`algebra`]: [`Algebra`], names for levels 0 to 4
//! - [`basis`]: [`BasisTable`] and [`SignedUnit`]
//! - [`laws`]: commutativity, associativity, alternativity, flexibility
//! - [`units`]: the unit group `{±e_i}`

pub mod algebra;
pub mod basis;
pub mod error;
pub mod laws;
pub mod number;
pub mod units;

mod proptests;

// Re-exports for convenience
pub use algebra::Algebra;
pub use basis::{BasisTable, MAX_TABLE_LEVEL, SignedUnit};
pub use error::{Error, Result};
pub use laws::Laws;
pub use number::{CayleyDickson, Scalar};
pub use units::unit_group;
