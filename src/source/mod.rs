//! Word sources
//!
//! The matcher only needs two things from a dictionary: exact-match membership
//! and iteration. [`WordSource`] captures that, so the matcher can run over
//! in-memory collections without touching the filesystem.
//!
//! [`WordDictionary`] is the owned source loaded from a JSON word list.

mod dictionary;

pub use dictionary::{SourceError, SourceResult, WordDictionary};

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// Collection of valid words
///
/// Membership is exact and case-sensitive.
pub trait WordSource {
    /// Check if `word` is a valid word
    fn contains_word(&self, word: &str) -> bool;

    /// Iterate over every valid word
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

impl<S: BuildHasher> WordSource for HashSet<String, S> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl WordSource for BTreeSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl<V, S: BuildHasher> WordSource for HashMap<String, V, S> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains_key(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.keys().map(String::as_str))
    }
}

impl<V> WordSource for BTreeMap<String, V> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains_key(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.keys().map(String::as_str))
    }
}

/// Keys of a parsed JSON object, e.g. `{"aardvark": 1, ...}`
impl WordSource for Map<String, Value> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains_key(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.keys().map(String::as_str))
    }
}

/// Ordered word lists. Membership is a linear scan, so keep these small.
impl<T: AsRef<str>> WordSource for [T] {
    fn contains_word(&self, word: &str) -> bool {
        self.iter().any(|w| w.as_ref() == word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(|w| w.as_ref()))
    }
}

impl<T: AsRef<str>> WordSource for Vec<T> {
    fn contains_word(&self, word: &str) -> bool {
        self.as_slice().contains_word(word)
    }

    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.as_slice().words()
    }
}
