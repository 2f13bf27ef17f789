//! Integration tests for tm-tools.
//!
//! Library-level tests run the transformations on in-memory buffers; the
//! binary tests spawn the built executables.

pub mod binary_tests;
