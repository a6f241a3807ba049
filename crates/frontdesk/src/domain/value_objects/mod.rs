//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod room_status;

pub use room_status::*;
