//! Integration test suite for algebra-group.
//!
//! Exercises the public API end to end: family constructors, structural
//! queries, quotients and isomorphism search across different element
//! types.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
mod integration;
