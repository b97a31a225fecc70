//! # Inbound Ports (Driving Ports)
//!
//! Public query API exposed by the Name Index subsystem.

use crate::domain::{FilterOutcome, FilterRequest, NameEntry, NameIndexError, ScanRequest};

/// Primary API for the Name Index subsystem.
///
/// Every operation first consults the availability gate and fails with
/// [`NameIndexError::NotReady`] while the node is still synchronizing.
/// A single call reads exactly one store snapshot, so all entries it
/// returns are evaluated at the same height.
pub trait NameIndexApi: Send + Sync {
    /// Availability gate on its own, for adapters that must reject an
    /// unsynchronized node before they parse any argument.
    fn check_ready(&self, operation: &str) -> Result<(), NameIndexError>;

    /// Current record for `name`.
    ///
    /// ## Returns
    ///
    /// - `Ok(NameEntry)`: the record with expiration at the snapshot height
    /// - `Err(NameNotFound)`: no record for this name
    fn name_show(&self, name: &str) -> Result<NameEntry, NameIndexError>;

    /// Every value `name` has held, oldest first, ending with the current one.
    fn name_history(&self, name: &str) -> Result<Vec<NameEntry>, NameIndexError>;

    /// Ordered enumeration from an inclusive start key.
    ///
    /// No filters, no pagination. `max_count <= 0` returns nothing and an
    /// omitted count uses the configured default.
    fn name_scan(&self, request: &ScanRequest) -> Result<Vec<NameEntry>, NameIndexError>;

    /// Pattern and recency filtering with offset/limit pagination, or stats.
    fn name_filter(&self, request: &FilterRequest) -> Result<FilterOutcome, NameIndexError>;
}
