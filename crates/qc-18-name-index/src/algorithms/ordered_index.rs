//! # Ordered Name Index
//!
//! Names kept in the `(length, bytes)` total order with start-anchored,
//! count-bounded enumeration.
//!
//! ## Count Semantics
//!
//! `scan` treats `max_count <= 0` as "return nothing", unlike
//! [`PaginationWindow`](super::PaginationWindow) where a limit of zero means
//! "no limit".

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound;

use crate::domain::{NameKey, NameRecord};

/// Name records in total order, keyed by [`NameKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedNameIndex {
    entries: BTreeMap<NameKey, NameRecord>,
}

impl OrderedNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record, returning the previous one.
    pub fn insert(&mut self, record: NameRecord) -> Option<NameRecord> {
        self.entries.insert(record.name.clone(), record)
    }

    /// Remove a record, returning it.
    pub fn remove(&mut self, name: &NameKey) -> Option<NameRecord> {
        self.entries.remove(name)
    }

    pub fn get(&self, name: &NameKey) -> Option<&NameRecord> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All records in total order.
    pub fn iter(&self) -> btree_map::Values<'_, NameKey, NameRecord> {
        self.entries.values()
    }

    /// Records whose key is `>= start` in total order (all when `start` is `None`).
    pub fn range_from<'a>(
        &'a self,
        start: Option<&'a NameKey>,
    ) -> impl Iterator<Item = &'a NameRecord> + 'a {
        let lower = match start {
            Some(key) => Bound::Included(key),
            None => Bound::Unbounded,
        };
        self.entries
            .range::<NameKey, _>((lower, Bound::Unbounded))
            .map(|(_, record)| record)
    }

    /// At most `max_count` records starting at the smallest key `>= start`.
    ///
    /// `max_count <= 0` yields an empty result. A start key past every
    /// entry also yields an empty result.
    pub fn scan<'a>(&'a self, start: Option<&'a NameKey>, max_count: i64) -> Vec<&'a NameRecord> {
        if max_count <= 0 {
            return Vec::new();
        }
        let cap = usize::try_from(max_count).unwrap_or(usize::MAX);
        self.range_from(start).take(cap).collect()
    }
}

impl FromIterator<NameRecord> for OrderedNameIndex {
    fn from_iter<I: IntoIterator<Item = NameRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}
