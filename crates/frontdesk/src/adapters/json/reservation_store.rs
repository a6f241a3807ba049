//! JSON implementation of ReservationRepository

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{read_document, write_document};
use crate::domain::{validate_room_id, DomainError, DomainResult, Reservation};
use crate::ports::ReservationRepository;

/// Reservations store backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonReservationStore {
    path: PathBuf,
}

impl JsonReservationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Root document. `reservations` is always written, even when empty.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ReservationsDocument {
    #[serde(default)]
    reservations: Vec<ReservationRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ReservationRecord {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    customer_name: String,
    room_id: u32,
    arrival_date: NaiveDate,
    departure_date: NaiveDate,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl TryFrom<ReservationRecord> for Reservation {
    type Error = DomainError;

    fn try_from(record: ReservationRecord) -> DomainResult<Self> {
        if record.customer_name.trim().is_empty() {
            return Err(DomainError::invalid("customer name is required"));
        }
        validate_room_id(record.room_id)?;
        if record.departure_date < record.arrival_date {
            return Err(DomainError::invalid(format!(
                "departure {} is before arrival {}",
                record.departure_date, record.arrival_date
            )));
        }

        Ok(Self {
            id: record.id,
            customer_name: record.customer_name,
            room_id: record.room_id,
            arrival_date: record.arrival_date,
            departure_date: record.departure_date,
            created_at: record.created_at,
        })
    }
}

impl From<&Reservation> for ReservationRecord {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            customer_name: reservation.customer_name.clone(),
            room_id: reservation.room_id,
            arrival_date: reservation.arrival_date,
            departure_date: reservation.departure_date,
            created_at: reservation.created_at,
        }
    }
}

impl ReservationRepository for JsonReservationStore {
    fn load_reservations(&self) -> DomainResult<Vec<Reservation>> {
        let doc: ReservationsDocument = read_document(&self.path)?.unwrap_or_default();

        let mut seen = HashSet::new();
        let mut reservations = Vec::with_capacity(doc.reservations.len());
        for record in doc.reservations {
            if !seen.insert(record.id) {
                return Err(DomainError::storage(
                    &self.path,
                    format!("duplicate reservation id {}", record.id),
                ));
            }
            let reservation = Reservation::try_from(record)
                .map_err(|e| DomainError::storage(&self.path, e))?;
            reservations.push(reservation);
        }

        tracing::debug!(
            "Loaded {} reservations from {}",
            reservations.len(),
            self.path.display()
        );
        Ok(reservations)
    }

    fn save_reservations(&self, reservations: &[Reservation]) -> DomainResult<()> {
        let doc = ReservationsDocument {
            reservations: reservations.iter().map(ReservationRecord::from).collect(),
        };
        write_document(&self.path, &doc)?;

        tracing::debug!(
            "Saved {} reservations to {}",
            reservations.len(),
            self.path.display()
        );
        Ok(())
    }
}
