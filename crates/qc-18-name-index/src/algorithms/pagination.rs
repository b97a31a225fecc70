//! # Pagination
//!
//! Offset/limit windowing over the filtered sequence. Unlike
//! [`OrderedNameIndex::scan`](super::OrderedNameIndex::scan), a limit of
//! zero means "no limit".

use crate::domain::NameIndexError;

/// Validated `(offset, limit)` window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationWindow {
    offset: usize,
    /// `None` takes every remaining item.
    limit: Option<usize>,
}

impl PaginationWindow {
    /// Validate caller-supplied values. Negative offsets or limits are rejected.
    pub fn from_request(offset: i64, limit: i64) -> Result<Self, NameIndexError> {
        if offset < 0 {
            return Err(NameIndexError::invalid(format!(
                "offset must be non-negative, got {}",
                offset
            )));
        }
        if limit < 0 {
            return Err(NameIndexError::invalid(format!(
                "limit must be non-negative, got {}",
                limit
            )));
        }
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = match limit {
            0 => None,
            n => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        };
        Ok(Self { offset, limit })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Skip `offset` items, then take up to `limit` of the rest.
    pub fn apply<I: Iterator>(&self, items: I) -> impl Iterator<Item = I::Item> {
        items
            .skip(self.offset)
            .take(self.limit.unwrap_or(usize::MAX))
    }
}
