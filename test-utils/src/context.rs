use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

pub const SETTINGS_FILE: &str = "settings.json";
pub const WHITELIST_FILE: &str = "whitelist.json";

/// Test context owning a temporary config root.
///
/// The directory and everything in it is removed when the context is dropped, so each test
/// gets an isolated set of guild documents.
pub struct TestContext {
    /// Temporary directory used as the store root.
    dir: TempDir,
}

impl TestContext {
    /// Creates a new context with an empty config root.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an empty temporary directory
    /// - `Err(TestError::Io)` - Temporary directory could not be created
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Root directory to construct the store under test with.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn guild_dir(&self, guild_id: u64) -> PathBuf {
        self.root().join(guild_id.to_string())
    }

    pub fn document_path(&self, guild_id: u64, file: &str) -> PathBuf {
        self.guild_dir(guild_id).join(file)
    }

    /// Writes raw document contents, creating the guild directory.
    ///
    /// Used for seeding documents, including intentionally malformed ones.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose directory receives the file
    /// - `file` - File name, usually `SETTINGS_FILE` or `WHITELIST_FILE`
    /// - `contents` - Raw file contents
    ///
    /// # Returns
    /// - `Ok(())` - File written
    /// - `Err(TestError::Io)` - Directory or file could not be written
    pub async fn write_raw(&self, guild_id: u64, file: &str, contents: &str) -> Result<(), TestError> {
        tokio::fs::create_dir_all(self.guild_dir(guild_id)).await?;
        tokio::fs::write(self.document_path(guild_id, file), contents).await?;
        Ok(())
    }

    /// Reads the raw contents of a document.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - File contents
    /// - `Ok(None)` - File does not exist
    /// - `Err(TestError::Io)` - File exists but could not be read
    pub async fn read_raw(&self, guild_id: u64, file: &str) -> Result<Option<String>, TestError> {
        match tokio::fs::read_to_string(self.document_path(guild_id, file)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads and parses a document directly from disk, bypassing the store.
    ///
    /// # Returns
    /// - `Ok(Some(Value))` - Parsed document
    /// - `Ok(None)` - File does not exist
    /// - `Err(TestError)` - File could not be read or is not valid JSON
    pub async fn read_json(&self, guild_id: u64, file: &str) -> Result<Option<Value>, TestError> {
        match self.read_raw(guild_id, file).await? {
            Some(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            None => Ok(None),
        }
    }

    pub async fn read_settings_document(&self, guild_id: u64) -> Result<Option<Value>, TestError> {
        self.read_json(guild_id, SETTINGS_FILE).await
    }

    pub async fn read_whitelist_document(&self, guild_id: u64) -> Result<Option<Value>, TestError> {
        self.read_json(guild_id, WHITELIST_FILE).await
    }
}
