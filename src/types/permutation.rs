//! Permutation table type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered list of character positions describing how to rearrange a word.
///
/// Position `i` of the permuted word is taken from position `indices[i]` of
/// the original word. Callers are expected to supply a real permutation of
/// `0..n`; nothing here enforces it (see [`PermutationTable::is_permutation`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermutationTable {
    indices: Vec<usize>,
}

impl PermutationTable {
    /// Create a table from its indices
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Identity table of length `n`
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }

    /// Number of positions (the word length this table applies to)
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Get the raw indices
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Apply the table to a word.
    ///
    /// Works on characters, not bytes. Returns `None` when an index points
    /// past the end of the word, which only happens for malformed tables or
    /// words of the wrong length.
    pub fn apply(&self, word: &str) -> Option<String> {
        let chars: Vec<char> = word.chars().collect();
        self.indices.iter().map(|&i| chars.get(i).copied()).collect()
    }

    /// Check that the indices are exactly `0..n` in some order
    pub fn is_permutation(&self) -> bool {
        let n = self.indices.len();
        let mut seen = vec![false; n];
        for &i in &self.indices {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// Check that applying the table twice gives back the original word.
    ///
    /// For involutions a membership-only pair `w -> w'` is always a true
    /// mutual image under the table.
    pub fn is_involution(&self) -> bool {
        self.is_permutation()
            && self
                .indices
                .iter()
                .enumerate()
                .all(|(pos, &i)| self.indices[i] == pos)
    }
}

impl From<Vec<usize>> for PermutationTable {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

impl<const N: usize> From<[usize; N]> for PermutationTable {
    fn from(indices: [usize; N]) -> Self {
        Self::new(indices.to_vec())
    }
}

impl fmt::Display for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (pos, i) in self.indices.iter().enumerate() {
            if pos > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", i)?;
        }
        write!(f, ")")
    }
}

/// Error returned when a permutation table string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTableError(String);

impl fmt::Display for ParseTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid permutation table: {}", self.0)
    }
}

impl std::error::Error for ParseTableError {}

impl FromStr for PermutationTable {
    type Err = ParseTableError;

    /// Parse `"0,3,1,2"`, `"(0, 3, 1, 2)"`, `"[0 3 1 2]"` and similar
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .trim_start_matches(['(', '['])
            .trim_end_matches([')', ']']);

        let indices = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| ParseTableError(format!("'{}' is not a position index", part)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if indices.is_empty() {
            return Err(ParseTableError(format!("no indices in '{}'", s)));
        }

        Ok(Self::new(indices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_swaps_middle_letters() {
        let table = PermutationTable::from([0, 2, 1, 3]);
        assert_eq!(table.apply("abcd").as_deref(), Some("acbd"));
    }

    #[test]
    fn test_apply_reversal() {
        let table = PermutationTable::from([2, 1, 0]);
        assert_eq!(table.apply("cat").as_deref(), Some("tac"));
    }

    #[test]
    fn test_apply_uses_characters_not_bytes() {
        let table = PermutationTable::from([1, 0]);
        assert_eq!(table.apply("éa").as_deref(), Some("aé"));
    }

    #[test]
    fn test_apply_out_of_range_index() {
        let table = PermutationTable::from([0, 5]);
        assert_eq!(table.apply("ab"), None);
    }

    #[test]
    fn test_is_permutation() {
        assert!(PermutationTable::from([0, 3, 1, 2]).is_permutation());
        assert!(PermutationTable::identity(0).is_permutation());
        assert!(!PermutationTable::from([0, 0, 1]).is_permutation());
        assert!(!PermutationTable::from([0, 3]).is_permutation());
    }

    #[test]
    fn test_is_involution() {
        assert!(PermutationTable::from([1, 0, 3, 2]).is_involution());
        assert!(PermutationTable::from([2, 1, 0]).is_involution());
        assert!(PermutationTable::identity(4).is_involution());
        // 3-cycle on the last three positions
        assert!(!PermutationTable::from([0, 3, 1, 2]).is_involution());
    }

    #[test]
    fn test_parse_formats() {
        let expected = PermutationTable::from([0, 3, 1, 2]);
        assert_eq!("0,3,1,2".parse::<PermutationTable>().unwrap(), expected);
        assert_eq!("(0, 3, 1, 2)".parse::<PermutationTable>().unwrap(), expected);
        assert_eq!("[0 3 1 2]".parse::<PermutationTable>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("0,x,1".parse::<PermutationTable>().is_err());
        assert!("-1,0".parse::<PermutationTable>().is_err());
        assert!("  ".parse::<PermutationTable>().is_err());
        assert!("()".parse::<PermutationTable>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PermutationTable::from([1, 0]).to_string(), "(1, 0)");
    }

    #[test]
    fn test_serde_as_array() {
        let table: PermutationTable = serde_json::from_str("[2, 1, 0]").unwrap();
        assert_eq!(table, PermutationTable::from([2, 1, 0]));
        assert_eq!(serde_json::to_string(&table).unwrap(), "[2,1,0]");
    }
}
