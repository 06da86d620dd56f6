//! Property-based tests for groups and their families.
