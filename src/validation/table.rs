//! Permutation table checks with human-readable warnings

use crate::types::PermutationTable;

/// Check a permutation table, return a warning if it is unusual or malformed
pub fn validate_permutation_table(table: &PermutationTable) -> Option<String> {
    let n = table.len();

    if n == 0 {
        return Some("⚠️ Empty permutation table: only the empty word can match".to_string());
    }

    if let Some(&index) = table.indices().iter().find(|&&i| i >= n) {
        return Some(format!(
            "⚠️ Index {} out of range for permutation table {} of length {}. Results are unspecified",
            index, table, n
        ));
    }

    if !table.is_permutation() {
        return Some(format!(
            "⚠️ Permutation table {} repeats an index. Results are unspecified",
            table
        ));
    }

    if !table.is_involution() {
        return Some(format!(
            "⚠️ Permutation table {} is not an involution. Pairs are recorded on dictionary membership only",
            table
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_involution() {
        assert!(validate_permutation_table(&PermutationTable::from([1, 0, 3, 2])).is_none());
        assert!(validate_permutation_table(&PermutationTable::from([0, 2, 1])).is_none());
        assert!(validate_permutation_table(&PermutationTable::identity(5)).is_none());
    }

    #[test]
    fn test_validate_empty() {
        let warning = validate_permutation_table(&PermutationTable::new(vec![]));
        assert!(warning.unwrap().contains("Empty permutation table"));
    }

    #[test]
    fn test_validate_out_of_range() {
        let warning = validate_permutation_table(&PermutationTable::from([0, 4, 1]));
        assert!(warning.unwrap().contains("Index 4 out of range"));
    }

    #[test]
    fn test_validate_duplicate() {
        let warning = validate_permutation_table(&PermutationTable::from([0, 0, 1]));
        assert!(warning.unwrap().contains("repeats an index"));
    }

    #[test]
    fn test_validate_non_involution() {
        let warning = validate_permutation_table(&PermutationTable::from([0, 3, 1, 2]));
        assert!(warning.unwrap().contains("not an involution"));
    }
}
