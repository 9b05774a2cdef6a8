//! Data types for word permutation matching
//!
//! This module contains the permutation table, the match mapping and the
//! result type shared by the library and the binary.

mod mapping;
mod permutation;

pub use mapping::MatchMapping;
pub use permutation::{ParseTableError, PermutationTable};

/// Result type for top-level operations (loading, matching, rendering)
pub type MatchResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
