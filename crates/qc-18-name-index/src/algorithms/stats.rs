//! # Stats Aggregation
//!
//! Aggregate over the filtered, unpaginated sequence. Stats mode reports
//! how many records matched, so pagination never applies here.

use crate::domain::NameStats;

/// Folds a filtered sequence into [`NameStats`].
pub struct StatsAggregator;

impl StatsAggregator {
    /// `{blocks: current_height, count: number of items}`.
    pub fn stats<I: IntoIterator>(items: I, current_height: u64) -> NameStats {
        NameStats {
            blocks: current_height,
            count: items.into_iter().count(),
        }
    }
}
