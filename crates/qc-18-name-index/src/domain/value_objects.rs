//! # Value Objects
//!
//! Query parameters and small immutable results of the Name Index subsystem.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::entities::{NameEntry, NameStats};
use super::errors::NameIndexError;

/// Default `name_scan` count when the caller omits it.
pub const DEFAULT_SCAN_COUNT: usize = 500;

/// Default number of blocks of undo data kept for reorgs.
pub const DEFAULT_MAX_UNDO_DEPTH: usize = 1000;

/// Expiration state of a record at the query height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    /// Blocks until expiration (negative once expired).
    pub expires_in: i64,
    /// Whether the record counts as expired.
    pub expired: bool,
}

/// Output mode of a filter query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Return the matching entries.
    #[default]
    List,
    /// Return `{blocks, count}` instead of entries.
    Stat,
}

impl FromStr for OutputMode {
    type Err = NameIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "stat" => Ok(Self::Stat),
            other => Err(NameIndexError::invalid(format!(
                "unrecognized output mode '{}' (expected 'list' or 'stat')",
                other
            ))),
        }
    }
}

/// Parameters of a `name_scan` query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRequest {
    /// Inclusive start key; `None` starts at the smallest key.
    pub start: Option<Vec<u8>>,
    /// Maximum entries; `None` uses the configured default, `<= 0` yields nothing.
    pub max_count: Option<i64>,
}

impl ScanRequest {
    pub fn new(start: Option<&str>, max_count: Option<i64>) -> Self {
        Self {
            start: start.map(|s| s.as_bytes().to_vec()),
            max_count,
        }
    }
}

/// Parameters of a `name_filter` query.
///
/// Numeric fields are signed as received from callers. `max_age <= 0`
/// disables recency filtering, `limit == 0` means no limit, and a
/// negative `offset` or `limit` is rejected before any record is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    pub pattern: Option<String>,
    pub max_age: i64,
    pub offset: i64,
    pub limit: i64,
    pub mode: OutputMode,
}

impl FilterRequest {
    pub fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    pub fn max_age(mut self, max_age: i64) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn page(mut self, offset: i64, limit: i64) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    pub fn stats(mut self) -> Self {
        self.mode = OutputMode::Stat;
        self
    }
}

/// Result of a filter query: a listing or an aggregate, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterOutcome {
    List(Vec<NameEntry>),
    Stats(NameStats),
}

impl FilterOutcome {
    /// The listing, if this outcome is one.
    pub fn into_list(self) -> Option<Vec<NameEntry>> {
        match self {
            Self::List(entries) => Some(entries),
            Self::Stats(_) => None,
        }
    }

    /// The aggregate, if this outcome is one.
    pub fn as_stats(&self) -> Option<NameStats> {
        match self {
            Self::Stats(stats) => Some(*stats),
            Self::List(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_parse() {
        assert_eq!("list".parse::<OutputMode>().unwrap(), OutputMode::List);
        assert_eq!("stat".parse::<OutputMode>().unwrap(), OutputMode::Stat);
    }

    #[test]
    fn test_output_mode_rejects_unknown_token() {
        let err = "string".parse::<OutputMode>().unwrap_err();
        assert!(matches!(err, NameIndexError::InvalidArgument(_)));
        assert_eq!(err.code(), -8);
    }

    #[test]
    fn test_filter_request_builder() {
        let req = FilterRequest::default().pattern("[ac]").max_age(30).page(1, 4).stats();
        assert_eq!(req.pattern.as_deref(), Some("[ac]"));
        assert_eq!(req.max_age, 30);
        assert_eq!((req.offset, req.limit), (1, 4));
        assert_eq!(req.mode, OutputMode::Stat);
    }

    #[test]
    fn test_stats_outcome_serializes_flat() {
        let outcome = FilterOutcome::Stats(NameStats {
            blocks: 251,
            count: 2,
        });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({"blocks": 251, "count": 2})
        );
    }
}
