//! Property-based tests

mod traversal;
