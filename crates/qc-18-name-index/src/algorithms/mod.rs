//! # Algorithms
//!
//! Pure query building blocks: ordered enumeration, expiration evaluation,
//! filters, pagination and stats. No locks and no I/O.

pub mod expiration;
pub mod filters;
pub mod ordered_index;
pub mod pagination;
pub mod stats;

pub use expiration::ExpirationPolicy;
pub use filters::{PatternFilter, RecencyFilter};
pub use ordered_index::OrderedNameIndex;
pub use pagination::PaginationWindow;
pub use stats::StatsAggregator;
