//! Finite abstract algebra, umbrella crate.
//!
//! Re-exports every component crate under a short module name. The
//! Cayley-Dickson algebras sit behind the default `cayley-dickson` feature.
//!
//! ```
//! use algebra::group::{dn, zn};
//!
//! let d3 = dn(3).unwrap();
//! assert_eq!(d3.len(), 6);
//! assert!(!d3.is_isomorphic(&zn(6).unwrap()).unwrap());
//! ```

#![forbid(unsafe_code)]

pub use algebra_core as core;
pub use algebra_group as group;

#[cfg(feature = "cayley-dickson")]
pub use algebra_cayley_dickson as cayley_dickson;
