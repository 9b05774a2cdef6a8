//! Permutation matcher
//!
//! Partitions the words of a [`WordSource`] whose length equals the table
//! length into fixed points (`w -> w`) and pairs (`w <-> w'`), where `w'` is
//! `w` rearranged by the [`PermutationTable`].
//!
//! # Semantics
//!
//! Words are visited in the source's iteration order:
//!
//! 1. Words already recorded as a key are skipped.
//! 2. Words whose character count differs from the table length are skipped.
//! 3. If the permuted word equals the word, it is recorded as a fixed point.
//! 4. Otherwise, if the permuted word is in the source, both directions are
//!    recorded.
//!
//! Step 4 checks membership only. It does not reapply the table to `w'`, so
//! for non-involutive tables the recorded pairs are not necessarily mutual
//! images. [`find_permutations_strict`] adds that round-trip check.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use word_permutations::{find_permutations, PermutationTable};
//!
//! let words: HashSet<String> = ["ab", "ba", "aa"].iter().map(|s| s.to_string()).collect();
//! let mapping = find_permutations(&words, &PermutationTable::from([1, 0]));
//!
//! assert_eq!(mapping.get("ab"), Some("ba"));
//! assert_eq!(mapping.get("aa"), Some("aa"));
//! ```

use crate::source::WordSource;
use crate::types::{MatchMapping, PermutationTable};

/// Find fixed points and pairs of `words` under `table`.
///
/// The table is not validated. Indices past the end of a word make that word
/// unmatched; duplicate indices simply produce whatever word they spell.
pub fn find_permutations<W>(words: &W, table: &PermutationTable) -> MatchMapping
where
    W: WordSource + ?Sized,
{
    collect_matches(words, table, |_, _| true)
}

/// Like [`find_permutations`], but a pair is only recorded when applying the
/// table to `w'` gives back `w`.
///
/// Identical to [`find_permutations`] for involutive tables.
pub fn find_permutations_strict<W>(words: &W, table: &PermutationTable) -> MatchMapping
where
    W: WordSource + ?Sized,
{
    collect_matches(words, table, |word, permuted| {
        table.apply(permuted).as_deref() == Some(word)
    })
}

fn collect_matches<W, F>(words: &W, table: &PermutationTable, accept_pair: F) -> MatchMapping
where
    W: WordSource + ?Sized,
    F: Fn(&str, &str) -> bool,
{
    let n = table.len();
    let mut mapping = MatchMapping::new();

    for word in words.words() {
        if mapping.contains(word) {
            continue;
        }
        if word.chars().count() != n {
            continue;
        }
        let Some(permuted) = table.apply(word) else {
            continue;
        };

        if permuted == word {
            mapping.insert(word.to_string(), permuted);
        } else if words.contains_word(&permuted) && accept_pair(word, &permuted) {
            mapping.insert(word.to_string(), permuted.clone());
            mapping.insert(permuted, word.to_string());
        }
    }

    mapping
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_swap_middle_pair_excludes_short_word() {
        let words = set(&["abcd", "acbd", "xyz"]);
        let mapping = find_permutations(&words, &PermutationTable::from([0, 2, 1, 3]));

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("abcd"), Some("acbd"));
        assert_eq!(mapping.get("acbd"), Some("abcd"));
        assert!(!mapping.contains("xyz"));
    }

    #[test]
    fn test_two_letter_swap() {
        let words = set(&["ab", "ba"]);
        let mapping = find_permutations(&words, &PermutationTable::from([1, 0]));

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("ab"), Some("ba"));
        assert_eq!(mapping.get("ba"), Some("ab"));
    }

    #[test]
    fn test_fixed_point() {
        let words = set(&["aa"]);
        let mapping = find_permutations(&words, &PermutationTable::from([1, 0]));

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("aa"), Some("aa"));
    }

    #[test]
    fn test_identity_fixes_every_word_of_that_length() {
        let words = set(&["abc", "xyz", "ab"]);
        let mapping = find_permutations(&words, &PermutationTable::identity(3));

        assert_eq!(mapping.fixed_points(), vec!["abc", "xyz"]);
        assert!(!mapping.contains("ab"));
    }

    #[test]
    fn test_no_match() {
        let words = set(&["cat", "dog"]);
        let mapping = find_permutations(&words, &PermutationTable::from([2, 1, 0]));
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_length_counts_characters() {
        let words = set(&["éa", "aé"]);
        let mapping = find_permutations(&words, &PermutationTable::from([1, 0]));
        assert_eq!(mapping.get("éa"), Some("aé"));
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let words = set(&["ab", "BA"]);
        let mapping = find_permutations(&words, &PermutationTable::from([1, 0]));
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_out_of_range_index_does_not_panic() {
        let words = set(&["ab", "ba"]);
        let mapping = find_permutations(&words, &PermutationTable::from([0, 7]));
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_three_cycle_membership_only_is_asymmetric() {
        // (1, 2, 0) maps abc -> bca -> cab -> abc. Every image is in the
        // list, so "cab" overwrites the entry "abc" got from the first pair.
        let words = vec!["abc", "cab", "bca"];
        let mapping = find_permutations(&words, &PermutationTable::from([1, 2, 0]));

        assert_eq!(mapping.get("abc"), Some("cab"));
        assert_eq!(mapping.get("bca"), Some("abc"));
        assert_eq!(mapping.get("cab"), Some("abc"));
        assert!(mapping.is_closed());
        assert!(!mapping.is_symmetric());
    }

    #[test]
    fn test_three_cycle_strict_records_nothing() {
        let words = vec!["abc", "cab", "bca"];
        let mapping = find_permutations_strict(&words, &PermutationTable::from([1, 2, 0]));
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_strict_matches_default_for_involution() {
        let words = set(&["ab", "ba", "aa", "cd"]);
        let table = PermutationTable::from([1, 0]);
        assert_eq!(
            find_permutations(&words, &table),
            find_permutations_strict(&words, &table)
        );
    }

    #[test]
    fn test_idempotent() {
        let words = set(&["stop", "tops", "spot", "pots", "opts", "post"]);
        let table = PermutationTable::from([3, 2, 1, 0]);
        assert_eq!(
            find_permutations(&words, &table),
            find_permutations(&words, &table)
        );
    }
}
