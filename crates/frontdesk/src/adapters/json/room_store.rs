//! JSON implementation of RoomRepository

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{read_document, write_document};
use crate::domain::{DomainError, DomainResult, Room};
use crate::ports::RoomRepository;

/// Rooms store backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonRoomStore {
    path: PathBuf,
}

impl JsonRoomStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RoomsDocument {
    #[serde(default)]
    rooms: Vec<RoomRecord>,
}

/// Durable part of a room; status is always recomputed from the ledger
#[derive(Debug, Serialize, Deserialize)]
struct RoomRecord {
    id: u32,
    #[serde(rename = "type")]
    room_type: String,
}

impl From<&Room> for RoomRecord {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            room_type: room.room_type.clone(),
        }
    }
}

impl RoomRepository for JsonRoomStore {
    fn load_rooms(&self) -> DomainResult<Vec<Room>> {
        let doc: RoomsDocument = read_document(&self.path)?.unwrap_or_default();

        let mut seen = HashSet::new();
        let mut rooms = Vec::with_capacity(doc.rooms.len());
        for record in doc.rooms {
            if !seen.insert(record.id) {
                return Err(DomainError::storage(
                    &self.path,
                    format!("duplicate room id {}", record.id),
                ));
            }
            let room = Room::new(record.id, record.room_type)
                .map_err(|e| DomainError::storage(&self.path, e))?;
            rooms.push(room);
        }

        tracing::debug!("Loaded {} rooms from {}", rooms.len(), self.path.display());
        Ok(rooms)
    }

    fn save_rooms(&self, rooms: &[Room]) -> DomainResult<()> {
        let doc = RoomsDocument {
            rooms: rooms.iter().map(RoomRecord::from).collect(),
        };
        write_document(&self.path, &doc)?;

        tracing::debug!("Saved {} rooms to {}", rooms.len(), self.path.display());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
