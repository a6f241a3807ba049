//! Room Repository Port
//!
//! Abstract interface for the rooms store.

use crate::domain::{DomainResult, Room};

/// Repository interface for the room registry.
///
/// Only `(id, type)` pairs are durable; loaded rooms are always Free until the
/// ledger reconciles them.
pub trait RoomRepository {
    /// Load every stored room in registration order. A missing store is empty.
    fn load_rooms(&self) -> DomainResult<Vec<Room>>;

    /// Replace the stored rooms with `rooms`
    fn save_rooms(&self, rooms: &[Room]) -> DomainResult<()>;

    /// Whether the store has ever been written
    fn exists(&self) -> bool;
}

// Lets one store back both the registry and the ledger.
impl<T: RoomRepository + ?Sized> RoomRepository for std::rc::Rc<T> {
    fn load_rooms(&self) -> DomainResult<Vec<Room>> {
        (**self).load_rooms()
    }

    fn save_rooms(&self, rooms: &[Room]) -> DomainResult<()> {
        (**self).save_rooms(rooms)
    }

    fn exists(&self) -> bool {
        (**self).exists()
    }
}
