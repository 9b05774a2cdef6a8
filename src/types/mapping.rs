//! Match mapping produced by the permutation matcher

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Word -> related word.
///
/// Fixed points map to themselves; mutual pairs are recorded in both
/// directions. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchMapping {
    entries: HashMap<String, String>,
}

impl MatchMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, word: String, related: String) {
        self.entries.insert(word, related);
    }

    /// Get the word recorded for `word`
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Check if `word` is a key
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(word, related)` entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Words that map to themselves, sorted
    pub fn fixed_points(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().filter(|(k, v)| k == v).map(|(k, _)| k).collect();
        words.sort_unstable();
        words
    }

    /// Mutual pairs, each listed once as `(a, b)` with `a < b`, sorted
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .iter()
            .filter(|&(k, v)| k < v && self.get(v) == Some(k))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Entries that are neither fixed points nor part of a mutual pair, sorted.
    ///
    /// Always empty for involutive tables. Non-involutive tables can leave
    /// these behind because pairs are recorded on dictionary membership only
    /// and a later pair may overwrite one side of an earlier one.
    pub fn one_way(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .iter()
            .filter(|&(k, v)| k != v && self.get(v) != Some(k))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Check that every value is also a key
    pub fn is_closed(&self) -> bool {
        self.entries.values().all(|v| self.entries.contains_key(v))
    }

    /// Check that every non-fixed entry is mirrored by its counterpart
    pub fn is_symmetric(&self) -> bool {
        self.one_way().is_empty()
    }

    /// Copy into a map with sorted keys
    pub fn to_sorted(&self) -> BTreeMap<&str, &str> {
        self.iter().collect()
    }

    /// Consume into the underlying map
    pub fn into_inner(self) -> HashMap<String, String> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a MatchMapping {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
