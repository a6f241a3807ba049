//! In-memory implementation of both repository ports
//!
//! Used by tests and by callers that do not want durable state.

use std::cell::{Cell, RefCell};

use crate::domain::{DomainError, DomainResult, Reservation, Room};
use crate::ports::{ReservationRepository, RoomRepository};

/// Store that keeps both documents in memory.
///
/// `fail_next_save` makes the next `save_*` call return `StorageUnavailable`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rooms: RefCell<Option<Vec<Room>>>,
    reservations: RefCell<Option<Vec<Reservation>>>,
    fail_next_save: Cell<bool>,
    saves: Cell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with already persisted rooms and reservations
    pub fn with_contents(rooms: Vec<Room>, reservations: Vec<Reservation>) -> Self {
        Self {
            rooms: RefCell::new(Some(rooms)),
            reservations: RefCell::new(Some(reservations)),
            ..Self::default()
        }
    }

    pub fn fail_next_save(&self) {
        self.fail_next_save.set(true);
    }

    /// Number of successful saves across both stores
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn stored_rooms(&self) -> Option<Vec<Room>> {
        self.rooms.borrow().clone()
    }

    pub fn stored_reservations(&self) -> Option<Vec<Reservation>> {
        self.reservations.borrow().clone()
    }

    fn check_save(&self) -> DomainResult<()> {
        if self.fail_next_save.replace(false) {
            return Err(DomainError::StorageUnavailable {
                path: "memory".to_string(),
                reason: "injected failure".to_string(),
            });
        }
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl RoomRepository for InMemoryStore {
    fn load_rooms(&self) -> DomainResult<Vec<Room>> {
        Ok(self.rooms.borrow().clone().unwrap_or_default())
    }

    fn save_rooms(&self, rooms: &[Room]) -> DomainResult<()> {
        self.check_save()?;
        *self.rooms.borrow_mut() = Some(rooms.to_vec());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.rooms.borrow().is_some()
    }
}

impl ReservationRepository for InMemoryStore {
    fn load_reservations(&self) -> DomainResult<Vec<Reservation>> {
        Ok(self.reservations.borrow().clone().unwrap_or_default())
    }

    fn save_reservations(&self, reservations: &[Reservation]) -> DomainResult<()> {
        self.check_save()?;
        *self.reservations.borrow_mut() = Some(reservations.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_does_not_exist() {
        let store = InMemoryStore::new();
        assert!(!store.exists());
        assert!(store.load_rooms().unwrap().is_empty());
        assert!(store.load_reservations().unwrap().is_empty());
    }

    #[test]
    fn test_injected_failure_applies_once() {
        let store = InMemoryStore::new();
        store.fail_next_save();

        assert!(store.save_rooms(&[]).is_err());
        assert!(!store.exists());
        assert!(store.save_rooms(&[]).is_ok());
        assert!(store.exists());
        assert_eq!(store.save_count(), 1);
    }
}
