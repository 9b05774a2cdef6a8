//! Word Permutations
//!
//! Finds dictionary words related by a fixed letter-position permutation.
//! Given a permutation table of length `n`, every `n`-letter word either maps
//! to itself (a fixed point), pairs up with another valid word, or is left out.
//!
//! # Modules
//!
//! - `types`: Core data structures (PermutationTable, MatchMapping)
//! - `source`: Word sources and the JSON dictionary loader
//! - `matcher`: The permutation matcher
//! - `validation`: Soft checks on permutation tables
//! - `config`: Environment-driven run configuration
//! - `report`: Rendering results for output
//!
//! # Example
//!
//! ```no_run
//! use word_permutations::{find_permutations, PermutationTable, WordDictionary};
//!
//! fn main() -> word_permutations::MatchResult<()> {
//!     let words = WordDictionary::from_json_file("words_dictionary.json")?;
//!     let mapping = find_permutations(&words, &PermutationTable::from([1, 0, 3, 2]));
//!     for (a, b) in mapping.pairs() {
//!         println!("{} <-> {}", a, b);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod matcher;
pub mod report;
pub mod source;
pub mod types;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::{ConfigError, MatcherConfig, OutputFormat};
pub use matcher::{find_permutations, find_permutations_strict};
pub use source::{SourceError, WordDictionary, WordSource};
pub use types::{MatchMapping, MatchResult, ParseTableError, PermutationTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
