//! Infrastructure Adapters
//!
//! Implementations of the repository ports.

pub mod json;
pub mod memory;

// Re-exports
pub use json::{JsonReservationStore, JsonRoomStore};
pub use memory::InMemoryStore;
