//! JSON file stores
//!
//! Each store is a single pretty-printed JSON document. Writes land in a
//! sibling `.tmp` file first and are renamed over the target.

mod reservation_store;
mod room_store;

pub use reservation_store::JsonReservationStore;
pub use room_store::JsonRoomStore;

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{DomainError, DomainResult};

/// Read and parse a store document. `Ok(None)` when the file does not exist.
fn read_document<T: DeserializeOwned>(path: &Path) -> DomainResult<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(DomainError::storage(path, e)),
    };

    match serde_json::from_str(&content) {
        Ok(doc) => Ok(Some(doc)),
        Err(e) => {
            tracing::warn!("Corrupt store at {}: {}", path.display(), e);
            Err(DomainError::storage(path, format!("corrupt document: {}", e)))
        }
    }
}

fn write_document<T: Serialize>(path: &Path, doc: &T) -> DomainResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DomainError::storage(parent, e))?;
        }
    }

    let content = serde_json::to_string_pretty(doc).map_err(|e| DomainError::storage(path, e))?;

    let tmp = tmp_path(path);
    fs::write(&tmp, content).map_err(|e| DomainError::storage(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(DomainError::storage(path, e));
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
