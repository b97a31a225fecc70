//! # Ports Layer
//!
//! Hexagonal architecture ports (interfaces) for the Name Index subsystem.
//!
//! - **Driving Ports (Inbound)**: the query API consumed by RPC adapters
//! - **Driven Ports (Outbound)**: the record store and sync state the
//!   service reads from

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
