//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Room: Bookable unit with derived occupancy
//! - Reservation: Booking of one room by one customer

mod reservation;
mod room;

pub use reservation::*;
pub use room::*;
