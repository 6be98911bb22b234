//! Filesystem-backed document store shared by the settings and whitelist repositories.
//!
//! Documents live under `<root>/<guild_id>/` as pretty-printed JSON. The store owns the path
//! layout, the raw read/write of documents and one async mutex per guild that repositories
//! hold across a load-modify-save cycle.

use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::error::store::StoreError;

pub const SETTINGS_FILE: &str = "settings.json";
pub const WHITELIST_FILE: &str = "whitelist.json";

/// Per-guild JSON document store.
///
/// Cheap to clone; clones share the root path and the guild lock table. Documents are never
/// cached in memory, every read goes to disk.
#[derive(Clone)]
pub struct ConfigStore {
    root: Arc<PathBuf>,
    locks: Arc<Mutex<HashMap<u64, Arc<Mutex<()>>>>>,
}

impl ConfigStore {
    /// Creates a store rooted at `root`.
    ///
    /// The directory does not need to exist yet; guild directories are created on first
    /// write.
    ///
    /// # Arguments
    /// - `root` - Directory holding one sub-directory per guild
    ///
    /// # Returns
    /// - `ConfigStore` - New store instance
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn guild_dir(&self, guild_id: u64) -> PathBuf {
        self.root.join(guild_id.to_string())
    }

    pub fn settings_path(&self, guild_id: u64) -> PathBuf {
        self.guild_dir(guild_id).join(SETTINGS_FILE)
    }

    pub fn whitelist_path(&self, guild_id: u64) -> PathBuf {
        self.guild_dir(guild_id).join(WHITELIST_FILE)
    }

    /// Acquires the guild's mutation lock.
    ///
    /// Held for the full span of a load-modify-save so concurrent editors of the same guild
    /// cannot overwrite each other's changes. Guilds never contend with one another.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `OwnedMutexGuard<()>` - Guard releasing the lock when dropped
    pub async fn lock_guild(&self, guild_id: u64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(guild_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    /// Reads and parses a document.
    ///
    /// # Arguments
    /// - `path` - Document path
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Document exists and parsed
    /// - `Ok(None)` - No document at `path`
    /// - `Err(StoreError::Io)` - File exists but could not be read
    /// - `Err(StoreError::Corrupt)` - File is not valid JSON for `T`
    pub async fn read_document<T: DeserializeOwned>(
        &self,
        path: &Path,
    ) -> Result<Option<T>, StoreError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::corrupt(path, e))
    }

    /// Serializes and writes a full document, replacing any previous version.
    ///
    /// Creates the guild directory if it is missing. The document is written to a sibling
    /// temporary file and renamed into place so a crash mid-write leaves either the old or
    /// the new document, never a truncated one.
    ///
    /// # Arguments
    /// - `path` - Document path inside a guild directory
    /// - `document` - Value to write
    ///
    /// # Returns
    /// - `Ok(())` - Document written
    /// - `Err(StoreError::Io)` - Directory creation, write or rename failed
    pub async fn write_document<T: Serialize>(
        &self,
        path: &Path,
        document: &T,
    ) -> Result<(), StoreError> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::io(dir, e))?;
        }

        let bytes = to_pretty_json(document).map_err(|e| StoreError::corrupt(path, e))?;

        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, bytes)
            .await
            .map_err(|e| StoreError::io(&tmp_path, e))?;
        tokio::fs::rename(&tmp_path, path)
            .await
            .map_err(|e| StoreError::io(path, e))?;

        Ok(())
    }

    /// Lists the guilds that have a document directory.
    ///
    /// Entries whose name is not a guild ID are skipped. A missing root yields an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<u64>)` - Guild IDs in ascending order
    /// - `Err(StoreError::Io)` - Root exists but could not be listed
    pub async fn guild_ids(&self) -> Result<Vec<u64>, StoreError> {
        let root = self.root();
        let mut entries = match tokio::fs::read_dir(root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(root, e)),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io(root, e))?
        {
            let is_dir = entry
                .file_type()
                .await
                .map(|t| t.is_dir())
                .unwrap_or(false);
            if !is_dir {
                continue;
            }
            if let Some(id) = entry.file_name().to_str().and_then(|n| n.parse().ok()) {
                ids.push(id);
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}

/// JSON with 4-space indentation, the layout existing documents use.
fn to_pretty_json<T: Serialize>(document: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut ser)?;
    Ok(buf)
}
