//! # Events
//!
//! Block connect/disconnect and sync notifications driving the store.

pub mod handler;
pub mod payloads;

pub use handler::ChainEventHandler;
pub use payloads::ChainEvent;
