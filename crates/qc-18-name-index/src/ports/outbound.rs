//! # Outbound Ports (Driven Ports)
//!
//! SPIs required by the Name Index subsystem.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::algorithms::OrderedNameIndex;
use crate::domain::{NameKey, NameRecord, StoreError};

/// Immutable view of the name database at one chain height.
///
/// Readers hold an `Arc` to a snapshot for the whole query; block
/// connects and reorgs publish a new snapshot and never touch one a
/// reader already holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSnapshot {
    /// Chain height the snapshot reflects.
    pub height: u64,
    /// Current records in total order.
    pub index: OrderedNameIndex,
    /// Superseded records per name, oldest first (current value excluded).
    pub history: BTreeMap<NameKey, Vec<NameRecord>>,
}

impl NameSnapshot {
    /// Empty snapshot at `height`.
    pub fn at_height(height: u64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Past records of `name`, oldest first.
    pub fn history_of(&self, name: &NameKey) -> &[NameRecord] {
        self.history.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Source of consistent name snapshots (the node's name database).
pub trait NameRecordStore: Send + Sync {
    /// Current snapshot. Cheap: returns a shared handle, never a copy.
    fn snapshot(&self) -> Result<Arc<NameSnapshot>, StoreError>;
}

/// Whether the node has finished initial synchronization.
pub trait SyncStateProvider: Send + Sync {
    fn is_synced(&self) -> bool;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock record store serving a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct MockNameStore {
    /// Snapshot returned by every call.
    pub snapshot: Arc<NameSnapshot>,
    /// Should return errors?
    pub should_fail: bool,
}

impl MockNameStore {
    pub fn with_records(height: u64, records: impl IntoIterator<Item = NameRecord>) -> Self {
        Self {
            snapshot: Arc::new(NameSnapshot {
                height,
                index: records.into_iter().collect(),
                history: BTreeMap::new(),
            }),
            should_fail: false,
        }
    }
}

impl NameRecordStore for MockNameStore {
    fn snapshot(&self) -> Result<Arc<NameSnapshot>, StoreError> {
        if self.should_fail {
            return Err(StoreError::Io("Mock failure".to_string()));
        }
        Ok(Arc::clone(&self.snapshot))
    }
}

/// Mock sync state with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct MockSyncState(pub bool);

impl SyncStateProvider for MockSyncState {
    fn is_synced(&self) -> bool {
        self.0
    }
}
