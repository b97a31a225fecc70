//! # Application Module
//!
//! Application services orchestrating the domain and outbound ports.

pub mod gate;
pub mod service;

pub use gate::AvailabilityGate;
pub use service::NameIndexService;
