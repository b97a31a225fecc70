//! Sync State Adapter
//!
//! Implements `SyncStateProvider` as a shared flag flipped by the chain
//! event handler when initial block download finishes or restarts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

use crate::ports::outbound::SyncStateProvider;

/// Shared synchronization flag. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct SyncFlag {
    synced: Arc<AtomicBool>,
}

impl SyncFlag {
    /// Flag starting in the given state.
    pub fn new(synced: bool) -> Self {
        Self {
            synced: Arc::new(AtomicBool::new(synced)),
        }
    }

    /// Record a new synchronization state; logs transitions only.
    pub fn set_synced(&self, synced: bool) {
        let previous = self.synced.swap(synced, Ordering::SeqCst);
        if previous != synced {
            info!("[qc-18] Sync state changed: synced={}", synced);
        }
    }
}

impl SyncStateProvider for SyncFlag {
    fn is_synced(&self) -> bool {
        self.synced.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_synced() {
        assert!(!SyncFlag::default().is_synced());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = SyncFlag::new(false);
        let observer = flag.clone();
        flag.set_synced(true);
        assert!(observer.is_synced());
        flag.set_synced(false);
        assert!(!observer.is_synced());
    }
}
