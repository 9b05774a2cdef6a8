//! Owned dictionary loaded from a JSON word list
//!
//! The bundled word list is a JSON object whose keys are the valid words
//! (`{"a": 1, "aa": 1, ...}`); values are ignored. A plain JSON array of
//! strings is accepted as well.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use super::WordSource;

/// Result type for dictionary loading
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while loading a dictionary
#[derive(Debug)]
pub enum SourceError {
    Io(std::io::Error),
    Json(serde_json::Error),
    UnsupportedShape(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Io(e) => write!(f, "IO error: {}", e),
            SourceError::Json(e) => write!(f, "JSON error: {}", e),
            SourceError::UnsupportedShape(msg) => write!(f, "Unsupported word list: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Json(e)
    }
}

/// Set of valid words with O(1) membership
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    words: HashSet<String>,
}

impl WordDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from any list of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a JSON word list
    pub fn from_json_str(content: &str) -> SourceResult<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_json_value(value)
    }

    /// Load a JSON word list from disk
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> SourceResult<Self> {
        let file = File::open(path.as_ref())?;
        let value: Value = serde_json::from_reader(BufReader::new(file))?;
        Self::from_json_value(value)
    }

    fn from_json_value(value: Value) -> SourceResult<Self> {
        match value {
            Value::Object(object) => Ok(Self::from_words(object.into_iter().map(|(word, _)| word))),
            Value::Array(items) => {
                let mut words = HashSet::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(word) => {
                            words.insert(word);
                        }
                        other => {
                            return Err(SourceError::UnsupportedShape(format!(
                                "expected a string in word array, found {}",
                                other
                            )))
                        }
                    }
                }
                Ok(Self { words })
            }
            other => Err(SourceError::UnsupportedShape(format!(
                "expected a JSON object or array, found {}",
                other
            ))),
        }
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if `word` is in the dictionary (exact, case-sensitive)
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl WordSource for WordDictionary {
    fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.words.iter().map(String::as_str))
    }
}

impl<S: Into<String>> FromIterator<S> for WordDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
