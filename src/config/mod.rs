//! Run configuration
//!
//! The binary is configured through environment variables:
//!
//! | Variable             | Meaning                                 | Default                                  |
//! |----------------------|-----------------------------------------|------------------------------------------|
//! | `WORDS_FILE_PATH`    | JSON word list                          | `words_dictionary.json` next to the exe  |
//! | `PERMUTATION_TABLE`  | table, e.g. `0,3,1,2`                   | `0,3,1,2`                                |
//! | `PERMUTATION_OUTPUT` | `json`, `pretty` or `pairs`             | `json`                                   |
//! | `PERMUTATION_STRICT` | `1`/`true` to round-trip check pairs    | off                                      |

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::types::PermutationTable;

/// File name looked up next to the executable when no path is configured
pub const DEFAULT_WORDS_FILE: &str = "words_dictionary.json";

/// Table used when none is configured
pub const DEFAULT_TABLE: &str = "0,3,1,2";

/// How the match mapping is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Compact JSON object, sorted keys
    #[default]
    Json,
    /// Indented JSON object, sorted keys
    Pretty,
    /// One line per fixed point or pair
    Pairs,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            "pairs" => Ok(OutputFormat::Pairs),
            other => Err(ConfigError::InvalidOutput(other.to_string())),
        }
    }
}

/// Errors that can occur while reading the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidTable(String),
    InvalidOutput(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTable(msg) => write!(f, "PERMUTATION_TABLE: {}", msg),
            ConfigError::InvalidOutput(value) => write!(
                f,
                "PERMUTATION_OUTPUT: unknown format '{}' (expected json, pretty or pairs)",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything a single run needs
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub words_path: PathBuf,
    pub table: PermutationTable,
    pub output: OutputFormat,
    pub strict: bool,
}

impl MatcherConfig {
    /// Create a config with default output and matching mode
    pub fn new<P: AsRef<Path>>(words_path: P, table: PermutationTable) -> Self {
        Self {
            words_path: words_path.as_ref().to_path_buf(),
            table,
            output: OutputFormat::default(),
            strict: false,
        }
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to
    /// its value if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let words_path = match lookup("WORDS_FILE_PATH") {
            Some(path) => {
                if Path::new(&path).is_absolute() {
                    PathBuf::from(path)
                } else {
                    current_dir.join(path)
                }
            }
            None => default_words_path(&current_dir),
        };

        let table = lookup("PERMUTATION_TABLE")
            .unwrap_or_else(|| DEFAULT_TABLE.to_string())
            .parse::<PermutationTable>()
            .map_err(|e| ConfigError::InvalidTable(e.to_string()))?;

        let output = match lookup("PERMUTATION_OUTPUT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let strict = lookup("PERMUTATION_STRICT")
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            words_path,
            table,
            output,
            strict,
        })
    }
}

/// `words_dictionary.json` in the executable's directory, falling back to
/// `current_dir`
fn default_words_path(current_dir: &Path) -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| current_dir.to_path_buf())
        .join(DEFAULT_WORDS_FILE)
}
