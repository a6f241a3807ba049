//! Application Layer
//!
//! The room registry and the reservation ledger that keeps it in sync.

mod ledger;
mod registry;

pub use ledger::ReservationLedger;
pub use registry::RoomRegistry;
