//! # Chain Event Handler
//!
//! Applies consensus notifications to the record store and the sync flag.
//!
//! `run` is the long-lived task: it drains a channel until every sender
//! is dropped. A failed event is logged and skipped; the loop keeps going.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::payloads::ChainEvent;
use crate::adapters::{InMemoryNameStore, SyncFlag};
use crate::domain::StoreError;

/// Handler feeding chain events into the name index.
pub struct ChainEventHandler {
    store: Arc<InMemoryNameStore>,
    sync: SyncFlag,
}

impl ChainEventHandler {
    pub fn new(store: Arc<InMemoryNameStore>, sync: SyncFlag) -> Self {
        Self { store, sync }
    }

    /// Apply one event.
    pub fn handle(&self, event: &ChainEvent) -> Result<(), StoreError> {
        debug!("[qc-18] Handling {}", event.kind());
        match event {
            ChainEvent::BlockConnected(block) => self.store.connect_block(block),
            ChainEvent::BlockDisconnected { height } => self.store.disconnect_block(*height),
            ChainEvent::SyncStateChanged { synced } => {
                self.sync.set_synced(*synced);
                Ok(())
            }
        }
    }

    /// Drain `events` until the channel closes. Returns the number of
    /// events applied successfully.
    pub async fn run(self, mut events: mpsc::Receiver<ChainEvent>) -> usize {
        info!("[qc-18] Chain event handler started");
        let mut applied = 0usize;

        while let Some(event) = events.recv().await {
            match self.handle(&event) {
                Ok(()) => applied += 1,
                Err(e) => error!("[qc-18] Failed to apply {}: {}", event.kind(), e),
            }
        }

        info!(
            "[qc-18] Chain event channel closed after {} events, shutting down",
            applied
        );
        applied
    }
}
