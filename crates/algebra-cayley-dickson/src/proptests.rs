//! Property-based tests for Cayley-Dickson arithmetic.
