//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory record store, sync flag and the RPC surface.

mod memory_store;
mod rpc;
mod sync_flag;

pub use memory_store::InMemoryNameStore;
pub use rpc::NameRpcHandler;
pub use sync_flag::SyncFlag;
