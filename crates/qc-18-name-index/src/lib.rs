//! # QC-18 Name Index
//!
//! Ordered enumeration, filtering and statistics over registered names,
//! evaluated consistently at one chain height.
//!
//! **Subsystem ID:** 18  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Lets RPC callers:
//! - list names in a stable `(length, bytes)` order starting at any key
//! - filter by pattern and by recency, with offset/limit pages
//! - count matches instead of listing them
//! - look up a single name and its value history
//!
//! Every answer carries the expiration state of each name at the height
//! the query read.
//!
//! ## Consistency
//!
//! A query binds one immutable store snapshot before any algorithm runs.
//! Block connects and reorgs publish new snapshots; they never mutate one
//! a query holds, so no answer mixes pre- and post-reorg state.
//!
//! ## Two Count Semantics
//!
//! | Operation | `0` means | Negative |
//! |-----------|-----------|----------|
//! | `name_scan` count | empty result | empty result |
//! | `name_filter` limit | no limit | `InvalidArgument` |
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-name-index/
//! ├── domain/          # NameKey order, records, entries, requests, errors
//! ├── algorithms/      # Ordered index, expiration, filters, pagination, stats
//! ├── ports/           # NameIndexApi (inbound) + record store / sync state (outbound)
//! ├── application/     # NameIndexService and the availability gate
//! ├── adapters/        # In-memory store, sync flag, RPC handler
//! ├── events/          # Chain events and their handler loop
//! └── config.rs        # NameIndexConfig (TOML)
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;

// Re-exports
pub use adapters::{InMemoryNameStore, NameRpcHandler, SyncFlag};
pub use algorithms::{
    ExpirationPolicy, OrderedNameIndex, PaginationWindow, PatternFilter, RecencyFilter,
    StatsAggregator,
};
pub use application::{AvailabilityGate, NameIndexService};
pub use config::{ConfigError, ExpirationAnchor, ExpirationConfig, ExpirationSchedule, NameIndexConfig};
pub use domain::{
    Expiry, FilterOutcome, FilterRequest, Hash, NameBlock, NameEntry, NameIndexError, NameKey,
    NameOpKind, NameOperation, NameRecord, NameStats, OutputMode, QueryContext, RpcError,
    RpcErrorCode, ScanRequest, StoreError, DEFAULT_MAX_UNDO_DEPTH, DEFAULT_SCAN_COUNT,
};
pub use events::{ChainEvent, ChainEventHandler};
pub use ports::{
    MockNameStore, MockSyncState, NameIndexApi, NameRecordStore, NameSnapshot, SyncStateProvider,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
