//! Configuration management for the Frontdesk CLI
//!
//! Stores data location, store file names and first-run rooms in
//! ~/.config/frontdesk/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "frontdesk";
const CONFIG_FILE: &str = "config.toml";

/// Room registered on first run, before any rooms store exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRoom {
    pub id: u32,
    #[serde(rename = "type")]
    pub room_type: String,
}

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding both stores (defaults to the home directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_reservations_file")]
    pub reservations_file: String,
    #[serde(default = "default_rooms_file")]
    pub rooms_file: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_seed_rooms")]
    pub seed_rooms: Vec<SeedRoom>,
}

fn default_reservations_file() -> String {
    "reservations.json".to_string()
}

fn default_rooms_file() -> String {
    "rooms.json".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_seed_rooms() -> Vec<SeedRoom> {
    vec![
        SeedRoom { id: 1, room_type: "single".to_string() },
        SeedRoom { id: 2, room_type: "double".to_string() },
        SeedRoom { id: 3, room_type: "suite".to_string() },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            reservations_file: default_reservations_file(),
            rooms_file: default_rooms_file(),
            log_level: default_log_level(),
            seed_rooms: default_seed_rooms(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Directory holding both stores
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir().context("Could not determine home directory"),
        }
    }

    pub fn reservations_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.reservations_file))
    }

    pub fn rooms_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.rooms_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.reservations_file, "reservations.json");
        assert_eq!(config.rooms_file, "rooms.json");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.seed_rooms.len(), 3);
        assert_eq!(config.seed_rooms[2], SeedRoom { id: 3, room_type: "suite".to_string() });
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
data_dir = "/srv/hotel"
rooms_file = "rooms-east.json"

[[seed_rooms]]
id = 101
type = "double"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/srv/hotel"));
        assert_eq!(config.rooms_path().unwrap(), PathBuf::from("/srv/hotel/rooms-east.json"));
        assert_eq!(
            config.reservations_path().unwrap(),
            PathBuf::from("/srv/hotel/reservations.json")
        );
        assert_eq!(config.seed_rooms, vec![SeedRoom { id: 101, room_type: "double".to_string() }]);
    }

    #[test]
    fn test_empty_seed_list_is_respected() {
        let config: Config = toml::from_str("seed_rooms = []").unwrap();
        assert!(config.seed_rooms.is_empty());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            log_level: "debug".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.data_dir, Some(dir.path().to_path_buf()));
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.seed_rooms, config.seed_rooms);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed_rooms = 3").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
