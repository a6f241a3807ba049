//! Reservation Repository Port
//!
//! Abstract interface for the reservations store.

use crate::domain::{DomainResult, Reservation};

/// Repository interface for the reservation ledger
pub trait ReservationRepository {
    /// Load the stored ledger in order. A missing store is empty.
    fn load_reservations(&self) -> DomainResult<Vec<Reservation>>;

    /// Replace the stored ledger with `reservations`.
    ///
    /// An empty slice is written as an explicitly empty document.
    fn save_reservations(&self, reservations: &[Reservation]) -> DomainResult<()>;
}

impl<T: ReservationRepository + ?Sized> ReservationRepository for std::rc::Rc<T> {
    fn load_reservations(&self) -> DomainResult<Vec<Reservation>> {
        (**self).load_reservations()
    }

    fn save_reservations(&self, reservations: &[Reservation]) -> DomainResult<()> {
        (**self).save_reservations(reservations)
    }
}
