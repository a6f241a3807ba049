//! Frontdesk Core Library
//!
//! Room registry, reservation ledger and their persistence contract for a
//! small front-desk application.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure entities and rules
//!   - `entities/`: Room, Reservation
//!   - `value_objects/`: RoomStatus
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Storage interfaces (traits)
//!
//! - **Application** (`application/`): RoomRegistry and ReservationLedger.
//!   The ledger owns the registry and is authoritative for occupancy; every
//!   mutation is written through to its store before it is reported.
//!
//! - **Adapters** (`adapters/`): JSON file stores and an in-memory store
//!
//! # Usage
//!
//! ```rust,ignore
//! use frontdesk::{JsonReservationStore, JsonRoomStore, ReservationLedger, RoomRegistry};
//!
//! let registry = RoomRegistry::open(JsonRoomStore::new("rooms.json"))?;
//! let mut ledger = ReservationLedger::open(registry, JsonReservationStore::new("reservations.json"))?;
//! ledger.register_room(1, "single")?;
//! let reservation = ledger.create("Alice", 1, arrival, departure)?;
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use adapters::{InMemoryStore, JsonReservationStore, JsonRoomStore};
pub use application::{ReservationLedger, RoomRegistry};
pub use domain::{
    parse_room_id, validate_room_id, DomainError, DomainResult, Reservation, Room, RoomStatus,
    SUGGESTED_ROOM_TYPES,
};
pub use ports::{ReservationRepository, RoomRepository};
