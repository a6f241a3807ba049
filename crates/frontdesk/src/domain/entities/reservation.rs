//! Reservation - Booking of one room for one stay
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Room};

/// Reservation - links a customer and a date span to exactly one room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Stable identifier, assigned at creation
    pub id: Uuid,
    pub customer_name: String,
    pub room_id: u32,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a new Reservation with generated ID and timestamp
    pub fn new(
        customer_name: impl Into<String>,
        room_id: u32,
        arrival_date: NaiveDate,
        departure_date: NaiveDate,
    ) -> DomainResult<Self> {
        let customer_name = customer_name.into().trim().to_string();
        if customer_name.is_empty() {
            return Err(DomainError::invalid("customer name is required"));
        }
        if departure_date < arrival_date {
            return Err(DomainError::invalid(format!(
                "departure {} is before arrival {}",
                departure_date, arrival_date
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            customer_name,
            room_id,
            arrival_date,
            departure_date,
            created_at: Utc::now(),
        })
    }

    /// One-line sentence shown in the reservation list.
    ///
    /// Rendered from the structured fields on demand; never parsed back.
    pub fn display_line(&self, room: Option<&Room>) -> String {
        let room_part = match room {
            Some(room) => room.to_string(),
            None => format!("Room {} - Type: unknown - Status: unknown", self.room_id),
        };

        format!(
            "Reservation for {} - {} - Arrival: {} - Departure: {}",
            self.customer_name, room_part, self.arrival_date, self.departure_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_trims_name_and_assigns_id() {
        let a = Reservation::new("  Alice ", 1, date(2024, 1, 10), date(2024, 1, 12)).unwrap();
        let b = Reservation::new("Alice", 1, date(2024, 1, 10), date(2024, 1, 12)).unwrap();
        assert_eq!(a.customer_name, "Alice");
        assert_ne!(a.id, b.id);
        assert_eq!(a.arrival_date, date(2024, 1, 10));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = Reservation::new(" ", 1, date(2024, 1, 10), date(2024, 1, 12));
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_departure_before_arrival_is_rejected() {
        let result = Reservation::new("Alice", 1, date(2024, 1, 12), date(2024, 1, 10));
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_same_day_departure_is_allowed() {
        let r = Reservation::new("Alice", 1, date(2024, 1, 10), date(2024, 1, 10)).unwrap();
        assert_eq!(r.arrival_date, r.departure_date);
    }

    #[test]
    fn test_display_line_keeps_delimiters_in_names() {
        let room = Room::new(1, "single").unwrap();
        let r = Reservation::new("Smith - Jones", 1, date(2024, 1, 10), date(2024, 1, 12)).unwrap();
        assert_eq!(
            r.display_line(Some(&room)),
            "Reservation for Smith - Jones - Room 1 - Type: single - Status: Free - Arrival: 2024-01-10 - Departure: 2024-01-12"
        );
        assert_eq!(r.customer_name, "Smith - Jones");
    }

    #[test]
    fn test_display_line_without_room() {
        let r = Reservation::new("Bob", 9, date(2024, 2, 1), date(2024, 2, 3)).unwrap();
        assert!(r.display_line(None).contains("Room 9 - Type: unknown"));
    }
}
