//! # Event Payloads
//!
//! Chain notifications the Name Index consumes from the consensus layer.

use serde::{Deserialize, Serialize};

use crate::domain::NameBlock;

/// Notification from the consensus layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainEvent {
    /// A block was connected at the tip.
    BlockConnected(NameBlock),
    /// The block at `height` (the tip) was disconnected during a reorg.
    BlockDisconnected { height: u64 },
    /// Initial block download finished (`true`) or restarted (`false`).
    SyncStateChanged { synced: bool },
}

impl ChainEvent {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BlockConnected(_) => "BlockConnected",
            Self::BlockDisconnected { .. } => "BlockDisconnected",
            Self::SyncStateChanged { .. } => "SyncStateChanged",
        }
    }
}
