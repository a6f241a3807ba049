//! Room Registry
//!
//! In-memory rooms in registration order, written through to a
//! [`RoomRepository`] on every addition.

use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult, Room, RoomStatus};
use crate::ports::RoomRepository;

/// Registry of known rooms and their derived occupancy
pub struct RoomRegistry<R: RoomRepository> {
    store: R,
    rooms: Vec<Room>,
}

impl<R: RoomRepository> RoomRegistry<R> {
    /// Load the registry from its store. Every room starts Free.
    pub fn open(store: R) -> DomainResult<Self> {
        let rooms = store.load_rooms()?;
        Ok(Self { store, rooms })
    }

    /// Register a new free room and rewrite the rooms store
    pub fn register(&mut self, id: u32, room_type: &str) -> DomainResult<Room> {
        let room = Room::new(id, room_type)?;
        if self.lookup(id).is_some() {
            return Err(DomainError::DuplicateRoom(id));
        }

        self.rooms.push(room.clone());
        if let Err(e) = self.store.save_rooms(&self.rooms) {
            self.rooms.pop();
            return Err(e);
        }

        tracing::info!("Registered room {} ({})", room.id, room.room_type);
        Ok(room)
    }

    /// Register `seeds` when the rooms store has never been written.
    ///
    /// Returns the number of rooms added. Invalid or repeated seeds are skipped.
    pub fn seed_if_missing<I, S>(&mut self, seeds: I) -> DomainResult<usize>
    where
        I: IntoIterator<Item = (u32, S)>,
        S: AsRef<str>,
    {
        if self.store.exists() {
            return Ok(0);
        }

        let before = self.rooms.len();
        let mut added = self.rooms.clone();
        for (id, room_type) in seeds {
            if added.iter().any(|r| r.id == id) {
                tracing::warn!("Skipping repeated seed room {}", id);
                continue;
            }
            match Room::new(id, room_type.as_ref()) {
                Ok(room) => added.push(room),
                Err(e) => tracing::warn!("Skipping seed room {}: {}", id, e),
            }
        }

        self.store.save_rooms(&added)?;
        self.rooms = added;

        let count = self.rooms.len() - before;
        tracing::info!("Seeded {} rooms", count);
        Ok(count)
    }

    pub fn lookup(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Rooms in registration order
    pub fn list(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub(crate) fn set_status(&mut self, id: u32, status: RoomStatus) -> DomainResult<()> {
        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(DomainError::RoomNotFound(id))?;
        room.status = status;
        Ok(())
    }

    /// Mark exactly the rooms in `occupied` as Occupied. Returns how many changed.
    pub(crate) fn reconcile(&mut self, occupied: &HashSet<u32>) -> usize {
        let mut changed = 0;
        for room in &mut self.rooms {
            let status = if occupied.contains(&room.id) {
                RoomStatus::Occupied
            } else {
                RoomStatus::Free
            };
            if room.status != status {
                room.status = status;
                changed += 1;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;

    fn registry() -> RoomRegistry<InMemoryStore> {
        RoomRegistry::open(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn test_register_persists_and_lists_in_order() {
        let mut reg = registry();
        reg.register(2, "double").unwrap();
        reg.register(1, "single").unwrap();

        let ids: Vec<u32> = reg.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(reg.store.stored_rooms().unwrap().len(), 2);
        assert_eq!(reg.lookup(1).unwrap().status, RoomStatus::Free);
    }

    #[test]
    fn test_duplicate_room_keeps_original_type() {
        let mut reg = registry();
        reg.register(1, "single").unwrap();

        let err = reg.register(1, "double").unwrap_err();
        assert!(matches!(err, DomainError::DuplicateRoom(1)));
        assert_eq!(reg.lookup(1).unwrap().room_type, "single");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_invalid_input() {
        let mut reg = registry();
        assert!(matches!(reg.register(0, "single"), Err(DomainError::InvalidInput(_))));
        assert!(matches!(reg.register(4, ""), Err(DomainError::InvalidInput(_))));
        assert!(reg.is_empty());
        assert!(reg.store.stored_rooms().is_none());
    }

    #[test]
    fn test_failed_save_leaves_registry_unchanged() {
        let mut reg = registry();
        reg.register(1, "single").unwrap();
        reg.store.fail_next_save();

        let err = reg.register(2, "double").unwrap_err();
        assert!(matches!(err, DomainError::StorageUnavailable { .. }));
        assert!(reg.lookup(2).is_none());
        assert_eq!(reg.store.stored_rooms().unwrap().len(), 1);
    }

    #[test]
    fn test_lookup_missing_room() {
        assert!(registry().lookup(42).is_none());
    }

    #[test]
    fn test_seed_only_when_store_missing() {
        let mut reg = registry();
        let added = reg
            .seed_if_missing([(1, "single"), (2, "double"), (2, "twin"), (3, "suite")])
            .unwrap();
        assert_eq!(added, 3);
        assert_eq!(reg.lookup(2).unwrap().room_type, "double");

        let mut again = RoomRegistry::open(InMemoryStore::with_contents(vec![], vec![])).unwrap();
        assert_eq!(again.seed_if_missing([(1, "single")]).unwrap(), 0);
        assert!(again.is_empty());
    }

    #[test]
    fn test_reconcile_counts_changes() {
        let mut reg = registry();
        reg.register(1, "single").unwrap();
        reg.register(2, "double").unwrap();
        reg.set_status(2, RoomStatus::Occupied).unwrap();

        let occupied: HashSet<u32> = [1].into_iter().collect();
        assert_eq!(reg.reconcile(&occupied), 2);
        assert!(reg.lookup(1).unwrap().is_occupied());
        assert!(!reg.lookup(2).unwrap().is_occupied());
        assert_eq!(reg.reconcile(&occupied), 0);
    }

    #[test]
    fn test_set_status_unknown_room() {
        let mut reg = registry();
        assert!(matches!(
            reg.set_status(5, RoomStatus::Occupied),
            Err(DomainError::RoomNotFound(5))
        ));
    }
}
