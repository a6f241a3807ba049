//! Reservation Ledger
//!
//! Ordered sequence of active reservations. The ledger is authoritative for
//! occupancy: it owns the [`RoomRegistry`] and keeps every room's status in
//! step with the reservations that reference it.

use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use super::RoomRegistry;
use crate::domain::{DomainError, DomainResult, Reservation, Room, RoomStatus};
use crate::ports::{ReservationRepository, RoomRepository};

/// Ledger of active reservations plus the registry it keeps in sync
pub struct ReservationLedger<R: RoomRepository, L: ReservationRepository> {
    registry: RoomRegistry<R>,
    store: L,
    reservations: Vec<Reservation>,
}

impl<R: RoomRepository, L: ReservationRepository> ReservationLedger<R, L> {
    /// Load the ledger and derive room occupancy from it
    pub fn open(registry: RoomRegistry<R>, store: L) -> DomainResult<Self> {
        let reservations = store.load_reservations()?;

        for r in &reservations {
            if registry.lookup(r.room_id).is_none() {
                tracing::warn!(
                    "Reservation {} for {} references unknown room {}",
                    r.id,
                    r.customer_name,
                    r.room_id
                );
            }
        }

        let mut ledger = Self {
            registry,
            store,
            reservations,
        };
        ledger.refresh();
        Ok(ledger)
    }

    pub fn registry(&self) -> &RoomRegistry<R> {
        &self.registry
    }

    /// Register a room through the registry, then re-derive occupancy
    pub fn register_room(&mut self, id: u32, room_type: &str) -> DomainResult<Room> {
        self.registry.register(id, room_type)?;
        self.refresh();
        self.registry
            .lookup(id)
            .cloned()
            .ok_or(DomainError::RoomNotFound(id))
    }

    /// Seed the registry on first run, then re-derive occupancy
    pub fn seed_rooms_if_missing<I, S>(&mut self, seeds: I) -> DomainResult<usize>
    where
        I: IntoIterator<Item = (u32, S)>,
        S: AsRef<str>,
    {
        let added = self.registry.seed_if_missing(seeds)?;
        self.refresh();
        Ok(added)
    }

    /// Reserve a free room.
    ///
    /// Occupancy is binary: the stored dates are not compared against other
    /// reservations.
    pub fn create(
        &mut self,
        customer_name: &str,
        room_id: u32,
        arrival_date: NaiveDate,
        departure_date: NaiveDate,
    ) -> DomainResult<Reservation> {
        let room = self
            .registry
            .lookup(room_id)
            .ok_or(DomainError::RoomNotFound(room_id))?;
        if room.is_occupied() {
            return Err(DomainError::RoomOccupied(room_id));
        }

        let reservation = Reservation::new(customer_name, room_id, arrival_date, departure_date)?;

        self.reservations.push(reservation.clone());
        if let Err(e) = self.store.save_reservations(&self.reservations) {
            self.reservations.pop();
            return Err(e);
        }
        self.registry.set_status(room_id, RoomStatus::Occupied)?;

        tracing::info!(
            "Created reservation {} for {} in room {} ({} to {})",
            reservation.id,
            reservation.customer_name,
            room_id,
            arrival_date,
            departure_date
        );
        Ok(reservation)
    }

    /// Cancel the reservation at zero-based `index` of the current list.
    ///
    /// Later entries shift down by one; re-fetch [`list`](Self::list) afterwards.
    pub fn cancel(&mut self, index: usize) -> DomainResult<Reservation> {
        let len = self.reservations.len();
        let room_id = self
            .reservations
            .get(index)
            .map(|r| r.room_id)
            .ok_or(DomainError::IndexOutOfRange { index, len })?;
        if self.registry.lookup(room_id).is_none() {
            return Err(DomainError::RoomNotFound(room_id));
        }

        let removed = self.reservations.remove(index);
        if let Err(e) = self.store.save_reservations(&self.reservations) {
            self.reservations.insert(index, removed);
            return Err(e);
        }

        let status = if self.is_referenced(room_id) {
            RoomStatus::Occupied
        } else {
            RoomStatus::Free
        };
        self.registry.set_status(room_id, status)?;

        tracing::info!(
            "Cancelled reservation {} for {} in room {}",
            removed.id,
            removed.customer_name,
            room_id
        );
        Ok(removed)
    }

    /// Cancel by stable identifier, independent of list position
    pub fn cancel_by_id(&mut self, id: Uuid) -> DomainResult<Reservation> {
        let index = self
            .position(id)
            .ok_or(DomainError::ReservationNotFound(id))?;
        self.cancel(index)
    }

    /// Reservations in creation order, oldest first
    pub fn list(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.reservations.iter().position(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Recompute every room's status from the ledger. Returns how many rooms changed.
    pub fn refresh(&mut self) -> usize {
        let occupied: HashSet<u32> = self.reservations.iter().map(|r| r.room_id).collect();
        let changed = self.registry.reconcile(&occupied);
        if changed > 0 {
            tracing::debug!("Reconciled status of {} rooms", changed);
        }
        changed
    }

    /// True when every room is Occupied exactly when a reservation references it
    pub fn is_consistent(&self) -> bool {
        self.registry
            .list()
            .iter()
            .all(|room| room.is_occupied() == self.is_referenced(room.id))
    }

    /// Reservations whose room is not registered
    pub fn orphans(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations
            .iter()
            .filter(|r| self.registry.lookup(r.room_id).is_none())
    }

    fn is_referenced(&self, room_id: u32) -> bool {
        self.reservations.iter().any(|r| r.room_id == room_id)
    }
}
