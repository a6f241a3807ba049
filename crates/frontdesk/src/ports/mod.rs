//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the registry and ledger
//! reach durable storage.
//!
//! Implementations of these traits live in `adapters`.

pub mod repositories;

// Re-exports
pub use repositories::*;
