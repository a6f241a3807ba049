//! RoomStatus - Occupancy of a room

/// Room occupancy, derived from the reservation ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoomStatus {
    #[default]
    Free,
    Occupied,
}

impl RoomStatus {
    pub fn is_occupied(self) -> bool {
        self == RoomStatus::Occupied
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomStatus::Free => write!(f, "Free"),
            RoomStatus::Occupied => write!(f, "Occupied"),
        }
    }
}
