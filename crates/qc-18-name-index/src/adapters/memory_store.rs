//! # In-Memory Name Store
//!
//! Reference implementation of [`NameRecordStore`] fed by connected and
//! disconnected blocks.
//!
//! ## Publication
//!
//! The current snapshot sits behind a read-write lock as an `Arc`. Readers
//! clone the `Arc` and release the lock immediately. A writer builds the
//! next snapshot from a private copy and swaps it in, so a reader sees
//! either the old tip or the new one, never a mix.
//!
//! ## Undo Data
//!
//! Each connected block records the previous record of every name it
//! touched. Only the last `max_undo_depth` blocks keep undo data.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::NameIndexConfig;
use crate::domain::{NameBlock, NameKey, NameOpKind, NameRecord, StoreError};
use crate::ports::outbound::{NameRecordStore, NameSnapshot};

/// Previous state of one name touched by a block.
#[derive(Debug, Clone)]
struct NameUndo {
    name: NameKey,
    /// `None` when the block created the name.
    previous: Option<NameRecord>,
}

/// Undo data of one connected block, in application order.
#[derive(Debug, Clone)]
struct BlockUndo {
    height: u64,
    changes: Vec<NameUndo>,
}

/// Name database held in memory.
pub struct InMemoryNameStore {
    /// Published snapshot.
    current: RwLock<Arc<NameSnapshot>>,
    /// Undo data, oldest first. Also serializes writers.
    undo: Mutex<VecDeque<BlockUndo>>,
    /// Record superseded values for `name_history`.
    history_enabled: bool,
    /// Blocks of undo data kept.
    max_undo_depth: usize,
}

impl InMemoryNameStore {
    /// Empty store at height 0.
    pub fn new(config: &NameIndexConfig) -> Self {
        Self::at_height(config, 0)
    }

    /// Empty store whose tip is `height`.
    pub fn at_height(config: &NameIndexConfig, height: u64) -> Self {
        Self {
            current: RwLock::new(Arc::new(NameSnapshot::at_height(height))),
            undo: Mutex::new(VecDeque::new()),
            history_enabled: config.history_enabled,
            max_undo_depth: config.max_undo_depth,
        }
    }

    /// Current tip height.
    pub fn tip(&self) -> u64 {
        self.current.read().height
    }

    /// Blocks that can still be disconnected.
    pub fn undo_depth(&self) -> usize {
        self.undo.lock().len()
    }

    /// Apply the name operations of the block at `tip + 1`.
    pub fn connect_block(&self, block: &NameBlock) -> Result<(), StoreError> {
        let mut undo = self.undo.lock();
        let base = self.current.read().clone();

        let expected = base.height + 1;
        if block.height != expected {
            warn!(
                "[qc-18] Rejected block {} (expected {})",
                block.height, expected
            );
            return Err(StoreError::HeightMismatch {
                expected,
                got: block.height,
            });
        }

        let mut next = NameSnapshot::clone(&base);
        next.height = block.height;
        let mut changes = Vec::with_capacity(block.operations.len());

        for op in &block.operations {
            let previous = next.index.get(&op.name).cloned();
            let record = match (op.kind, &previous) {
                (NameOpKind::Register, _) => NameRecord::registered(
                    op.name.clone(),
                    op.value.clone(),
                    block.height,
                    op.txid,
                    op.vout,
                )
                .with_address(op.address.clone()),
                (NameOpKind::Update, Some(prev)) => prev.updated(
                    op.value.clone(),
                    block.height,
                    op.txid,
                    op.vout,
                    op.address.clone(),
                ),
                (NameOpKind::Update, None) => {
                    return Err(StoreError::UnknownName {
                        name: op.name.to_display(),
                        height: block.height,
                    });
                }
            };

            if self.history_enabled {
                if let Some(prev) = &previous {
                    next.history
                        .entry(op.name.clone())
                        .or_default()
                        .push(prev.clone());
                }
            }
            next.index.insert(record);
            changes.push(NameUndo {
                name: op.name.clone(),
                previous,
            });
        }

        *self.current.write() = Arc::new(next);

        if self.max_undo_depth > 0 {
            undo.push_back(BlockUndo {
                height: block.height,
                changes,
            });
            while undo.len() > self.max_undo_depth {
                if let Some(pruned) = undo.pop_front() {
                    debug!("[qc-18] Pruned undo data for block {}", pruned.height);
                }
            }
        }

        info!(
            "[qc-18] Connected block {} ({} name operations)",
            block.height,
            block.operations.len()
        );
        Ok(())
    }

    /// Revert the block at the tip. `height` must equal the current tip.
    pub fn disconnect_block(&self, height: u64) -> Result<(), StoreError> {
        let mut undo = self.undo.lock();
        let base = self.current.read().clone();

        if base.height == 0 {
            return Err(StoreError::NothingToDisconnect);
        }
        if height != base.height {
            return Err(StoreError::HeightMismatch {
                expected: base.height,
                got: height,
            });
        }
        let block_undo = match undo.back().map(|entry| entry.height) {
            Some(top) if top == height => undo.pop_back(),
            _ => None,
        };
        let block_undo = block_undo.ok_or(StoreError::ReorgTooDeep { height })?;

        let mut next = NameSnapshot::clone(&base);
        next.height = height - 1;

        for change in block_undo.changes.iter().rev() {
            match &change.previous {
                Some(prev) => {
                    next.index.insert(prev.clone());
                    if self.history_enabled {
                        pop_history(&mut next, &change.name);
                    }
                }
                None => {
                    next.index.remove(&change.name);
                }
            }
        }

        *self.current.write() = Arc::new(next);

        info!(
            "[qc-18] Disconnected block {} ({} names restored)",
            height,
            block_undo.changes.len()
        );
        Ok(())
    }
}

fn pop_history(snapshot: &mut NameSnapshot, name: &NameKey) {
    if let Some(past) = snapshot.history.get_mut(name) {
        past.pop();
        if past.is_empty() {
            snapshot.history.remove(name);
        }
    }
}

impl NameRecordStore for InMemoryNameStore {
    fn snapshot(&self) -> Result<Arc<NameSnapshot>, StoreError> {
        Ok(self.current.read().clone())
    }
}
