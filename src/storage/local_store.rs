// Durable named JSON slots on disk, one file per slot. Each slot holds a
// whole serialized structure and is rewritten in full on every change.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Names of the three durable slots.
pub mod slots {
    pub const CLUBS: &str = "clubs";
    pub const MEMBERSHIP: &str = "joinedByUser";
    pub const CURRENT_USER: &str = "currentUser";
}

pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open the slot directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).context(format!(
            "Failed to create storage directory: {}",
            dir.display()
        ))?;
        Ok(Self { dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }

    /// Read a slot, if present.
    ///
    /// Malformed content counts as absent: the caller falls back to its
    /// default state instead of failing the session.
    pub fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let path = self.slot_path(slot);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(slot, error = %e, "Failed to read storage slot");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    slot,
                    error = %e,
                    "Malformed storage slot, falling back to defaults"
                );
                None
            }
        }
    }

    /// Overwrite a slot with the full serialized value.
    pub fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)
            .context(format!("Failed to serialize value for slot: {}", slot))?;

        fs::write(self.slot_path(slot), bytes)
            .context(format!("Failed to write storage slot: {}", slot))?;

        Ok(())
    }
}
