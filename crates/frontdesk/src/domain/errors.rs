//! Domain Errors
//!
//! Error types for registry, ledger and store operations.

use std::path::Path;

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Room {0} already exists")]
    DuplicateRoom(u32),

    #[error("Room {0} not found")]
    RoomNotFound(u32),

    #[error("Room {0} is already occupied")]
    RoomOccupied(u32),

    #[error("Reservation index {index} out of range (ledger has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Reservation not found: {0}")]
    ReservationNotFound(Uuid),

    #[error("Storage unavailable at {path}: {reason}")]
    StorageUnavailable { path: String, reason: String },
}

impl DomainError {
    pub fn invalid<T: Into<String>>(message: T) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Wrap an io/serde failure for a store file
    pub fn storage<E: std::fmt::Display>(path: &Path, err: E) -> Self {
        Self::StorageUnavailable {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
