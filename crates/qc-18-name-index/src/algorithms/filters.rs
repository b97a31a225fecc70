//! # Record Filters
//!
//! Recency and pattern filters that narrow the ordered candidate sequence.
//! Neither affects ordering; both run before pagination and stats.

use regex::bytes::Regex;

use crate::domain::{NameIndexError, NameRecord};

/// Keeps records updated within the last `max_age` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyFilter {
    max_age: i64,
}

impl RecencyFilter {
    /// `max_age <= 0` disables recency filtering.
    pub fn new(max_age: i64) -> Self {
        Self { max_age }
    }

    pub fn is_active(&self) -> bool {
        self.max_age > 0
    }

    /// True iff `current_height - last_update_height <= max_age` (or inactive).
    pub fn matches(&self, record: &NameRecord, current_height: u64) -> bool {
        if !self.is_active() {
            return true;
        }
        let age = current_height.saturating_sub(record.last_update_height);
        i64::try_from(age).map_or(false, |age| age <= self.max_age)
    }
}

/// Unanchored regular-expression search over name keys.
///
/// Compiled once per query. The search is partial: a pattern matches any
/// key containing a match, so `[ac]` matches `"aa"`.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    regex: Option<Regex>,
}

impl PatternFilter {
    /// Compile `pattern`. Absent or empty patterns match everything.
    pub fn compile(pattern: Option<&str>) -> Result<Self, NameIndexError> {
        let regex = match pattern {
            None | Some("") => None,
            Some(p) => Some(Regex::new(p).map_err(|e| {
                NameIndexError::invalid(format!("invalid name pattern '{}': {}", p, e))
            })?),
        };
        Ok(Self { regex })
    }

    pub fn matches(&self, record: &NameRecord) -> bool {
        match &self.regex {
            Some(re) => re.is_match(record.name.as_bytes()),
            None => true,
        }
    }
}
