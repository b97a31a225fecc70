//! Domain invariants for the Name Index
//!
//! Checkable forms of the ordering and windowing guarantees, shared by the
//! unit, integration and property test suites.

use super::entities::{NameEntry, NameKey};

/// Total order: each key precedes the next by `(length, bytes)`.
pub fn invariant_total_order(keys: &[NameKey]) -> bool {
    keys.windows(2).all(|w| {
        let (a, b) = (w[0].as_bytes(), w[1].as_bytes());
        (a.len(), a) < (b.len(), b)
    })
}

/// Same check on rendered entries (names compared as UTF-8 bytes).
pub fn invariant_entries_ordered(entries: &[NameEntry]) -> bool {
    entries.windows(2).all(|w| {
        let (a, b) = (w[0].name.as_bytes(), w[1].name.as_bytes());
        (a.len(), a) < (b.len(), b)
    })
}

/// Scan monotonicity: a shorter scan is a prefix of a longer one.
pub fn invariant_prefix_of(shorter: &[NameEntry], longer: &[NameEntry]) -> bool {
    shorter.len() <= longer.len() && longer[..shorter.len()] == *shorter
}

/// Pagination composition: `page(O, L) == page(0, O + L)[O..]`.
pub fn invariant_page_composes(page: &[NameEntry], unpaged_prefix: &[NameEntry], offset: usize) -> bool {
    let tail = unpaged_prefix.get(offset..).unwrap_or(&[]);
    page == tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Expiry;
    use crate::domain::NameRecord;

    fn entry(name: &str) -> NameEntry {
        let rec = NameRecord::registered(NameKey::from(name), Vec::new(), 1, [0; 32], 0);
        NameEntry::from_record(
            &rec,
            Expiry {
                expires_in: 1,
                expired: false,
            },
        )
    }

    #[test]
    fn test_total_order_accepts_length_first() {
        let keys: Vec<NameKey> = ["a", "b", "c", "aa"].iter().map(|s| NameKey::from(*s)).collect();
        assert!(invariant_total_order(&keys));
    }

    #[test]
    fn test_total_order_rejects_plain_lexicographic() {
        let keys: Vec<NameKey> = ["a", "aa", "b"].iter().map(|s| NameKey::from(*s)).collect();
        assert!(!invariant_total_order(&keys));
    }

    #[test]
    fn test_total_order_rejects_duplicates() {
        let keys = vec![NameKey::from("a"), NameKey::from("a")];
        assert!(!invariant_total_order(&keys));
    }

    #[test]
    fn test_prefix_and_page() {
        let all: Vec<NameEntry> = ["a", "b", "c", "aa"].iter().map(|s| entry(s)).collect();
        assert!(invariant_entries_ordered(&all));
        assert!(invariant_prefix_of(&all[..2], &all));
        assert!(!invariant_prefix_of(&all[1..3], &all));
        assert!(invariant_page_composes(&all[1..4], &all, 1));
        assert!(invariant_page_composes(&[], &all, 9));
    }
}
