//! Repository Ports
//!
//! Abstract interfaces for the two independent stores.

mod reservation_repository;
mod room_repository;

pub use reservation_repository::*;
pub use room_repository::*;
