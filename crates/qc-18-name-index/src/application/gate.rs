//! # Availability Gate
//!
//! Rejects every query while the node is still in initial block download.
//! The gate is told the synchronization state; it never computes it.

use tracing::warn;

use crate::domain::NameIndexError;
use crate::ports::outbound::SyncStateProvider;

/// Guard shared by all query entry points.
pub struct AvailabilityGate<Y: SyncStateProvider> {
    sync: Y,
}

impl<Y: SyncStateProvider> AvailabilityGate<Y> {
    pub fn new(sync: Y) -> Self {
        Self { sync }
    }

    /// `Ok(())` once synchronized, `NotReady` before.
    pub fn check(&self, operation: &str) -> Result<(), NameIndexError> {
        if self.sync.is_synced() {
            Ok(())
        } else {
            warn!("[qc-18] Rejected {}: node not synchronized", operation);
            Err(NameIndexError::NotReady)
        }
    }
}
