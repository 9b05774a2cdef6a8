//! Permutation table validation
//!
//! This module provides soft validation for permutation tables. The matcher
//! never calls it; callers decide whether a warning matters.

mod table;

pub use table::validate_permutation_table;
