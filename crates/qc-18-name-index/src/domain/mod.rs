//! # Domain Layer
//!
//! Pure domain types for the Name Index subsystem.
//!
//! This module contains NO I/O dependencies. The record store and the
//! sync state are reached through ports in the `ports` module.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use value_objects::*;
