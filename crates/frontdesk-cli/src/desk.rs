//! Startup wiring: open both stores and the ledger from configuration

use anyhow::{Context, Result};

use frontdesk::{JsonReservationStore, JsonRoomStore, ReservationLedger, RoomRegistry};

use crate::config::Config;

/// Ledger backed by the JSON file stores
pub type Desk = ReservationLedger<JsonRoomStore, JsonReservationStore>;

/// Load rooms and reservations, seeding sample rooms on first run
pub fn open(config: &Config) -> Result<Desk> {
    let rooms_path = config.rooms_path()?;
    let reservations_path = config.reservations_path()?;

    let registry = RoomRegistry::open(JsonRoomStore::new(&rooms_path))
        .with_context(|| format!("Failed to load rooms from {:?}", rooms_path))?;
    let mut desk = ReservationLedger::open(registry, JsonReservationStore::new(&reservations_path))
        .with_context(|| format!("Failed to load reservations from {:?}", reservations_path))?;

    let seeds = config
        .seed_rooms
        .iter()
        .map(|seed| (seed.id, seed.room_type.as_str()));
    let seeded = desk
        .seed_rooms_if_missing(seeds)
        .context("Failed to write initial rooms")?;
    if seeded > 0 {
        tracing::info!("First run: registered {} sample rooms", seeded);
    }

    Ok(desk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config_in(dir: &tempfile::TempDir) -> Config {
        Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        }
    }

    #[test]
    fn test_first_run_seeds_sample_rooms() {
        let dir = tempfile::tempdir().unwrap();
        let desk = open(&config_in(&dir)).unwrap();

        let rooms: Vec<(u32, &str)> = desk
            .registry()
            .list()
            .iter()
            .map(|r| (r.id, r.room_type.as_str()))
            .collect();
        assert_eq!(rooms, vec![(1, "single"), (2, "double"), (3, "suite")]);
        assert!(dir.path().join("rooms.json").exists());
        assert!(desk.is_empty());
    }

    #[test]
    fn test_state_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let arrival = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let departure = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();

        {
            let mut desk = open(&config).unwrap();
            desk.register_room(12, "twin").unwrap();
            desk.create("Alice", 12, arrival, departure).unwrap();
        }

        let desk = open(&config).unwrap();
        assert_eq!(desk.registry().len(), 4);
        assert_eq!(desk.list().len(), 1);
        assert!(desk.registry().lookup(12).unwrap().is_occupied());
        assert!(!desk.registry().lookup(1).unwrap().is_occupied());
    }

    #[test]
    fn test_empty_rooms_store_is_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rooms.json"), r#"{"rooms":[]}"#).unwrap();

        let desk = open(&config_in(&dir)).unwrap();
        assert!(desk.registry().is_empty());
    }

    #[test]
    fn test_corrupt_store_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("reservations.json"), "<reservations/>").unwrap();

        let err = open(&config_in(&dir)).err().unwrap();
        assert!(err.to_string().contains("Failed to load reservations"));
    }
}
