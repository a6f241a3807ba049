//! Room - Bookable unit
//!
//! Pure domain entity without infrastructure dependencies.

use crate::domain::{DomainError, DomainResult, RoomStatus};

/// Category labels offered when registering a room. Any non-blank label is accepted.
pub const SUGGESTED_ROOM_TYPES: [&str; 3] = ["single", "double", "suite"];

/// Room - a bookable unit with a category label and derived occupancy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: u32,
    pub room_type: String,
    pub status: RoomStatus,
}

impl Room {
    /// Create a free room after validating id and type
    pub fn new(id: u32, room_type: impl Into<String>) -> DomainResult<Self> {
        validate_room_id(id)?;
        let room_type = room_type.into().trim().to_string();
        if room_type.is_empty() {
            return Err(DomainError::invalid("room type is required"));
        }

        Ok(Self {
            id,
            room_type,
            status: RoomStatus::Free,
        })
    }

    pub fn is_occupied(&self) -> bool {
        self.status.is_occupied()
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} - Type: {} - Status: {}",
            self.id, self.room_type, self.status
        )
    }
}

/// Room ids are positive integers
pub fn validate_room_id(id: u32) -> DomainResult<u32> {
    if id == 0 {
        return Err(DomainError::invalid("room id must be a positive integer"));
    }
    Ok(id)
}

/// Parse operator input such as `"12"` into a room id
pub fn parse_room_id(input: &str) -> DomainResult<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::invalid(format!(
            "room id must be a positive integer, got '{}'",
            input
        )));
    }

    let id = trimmed.parse::<u32>().map_err(|_| {
        DomainError::invalid(format!("room id '{}' is too large", trimmed))
    })?;
    validate_room_id(id)
}
