//! Settings repository for per-guild `settings.json` documents.
//!
//! Reads complete partially-stored documents with defaults, absent documents are created with
//! defaults on first access, and every mutation writes the full document back.

use crate::{data::store::ConfigStore, error::store::StoreError, model::settings::GuildSettings};

/// Repository providing access to guild settings documents.
pub struct SettingsRepository<'a> {
    store: &'a ConfigStore,
}

impl<'a> SettingsRepository<'a> {
    /// Creates a new SettingsRepository instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the document store
    ///
    /// # Returns
    /// - `SettingsRepository` - New repository instance
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// Loads a guild's settings, creating the default document if none exists.
    ///
    /// Stored values win over defaults; keys missing from the stored document take their
    /// default value without the document being rewritten. A document that cannot be parsed
    /// is reported as corrupt and left on disk untouched.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Stored settings completed with defaults
    /// - `Err(StoreError::Corrupt)` - Document exists but is not a valid settings document
    /// - `Err(StoreError::Io)` - Document could not be read or the default could not be written
    pub async fn load(&self, guild_id: u64) -> Result<GuildSettings, StoreError> {
        let path = self.store.settings_path(guild_id);
        if let Some(settings) = self.store.read_document(&path).await? {
            return Ok(settings);
        }

        // Creating the default races with a concurrent update, so do it under the lock
        let _guard = self.store.lock_guild(guild_id).await;
        self.load_or_create(guild_id).await
    }

    /// Overwrites a guild's settings document.
    ///
    /// Last writer wins; use `update` for read-modify-write.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `settings` - Full settings document to persist
    ///
    /// # Returns
    /// - `Ok(())` - Document written
    /// - `Err(StoreError::Io)` - Write failed
    pub async fn save(&self, guild_id: u64, settings: &GuildSettings) -> Result<(), StoreError> {
        self.store
            .write_document(&self.store.settings_path(guild_id), settings)
            .await
    }

    /// Applies a single change to a guild's settings under the guild lock.
    ///
    /// Loads the current document (creating the default if needed), applies `change` and
    /// writes the full document back while holding the guild's mutation lock, so two admins
    /// editing different fields at the same time both see their change persisted.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `change` - Mutation to apply
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings as persisted after the change
    /// - `Err(StoreError)` - Load or save failed; nothing was written
    pub async fn update<F>(&self, guild_id: u64, change: F) -> Result<GuildSettings, StoreError>
    where
        F: FnOnce(&mut GuildSettings),
    {
        let _guard = self.store.lock_guild(guild_id).await;

        let mut settings = self.load_or_create(guild_id).await?;
        change(&mut settings);
        self.save(guild_id, &settings).await?;

        Ok(settings)
    }

    /// Reads the settings document, writing the default if it is absent.
    ///
    /// Caller must hold the guild lock.
    async fn load_or_create(&self, guild_id: u64) -> Result<GuildSettings, StoreError> {
        let path = self.store.settings_path(guild_id);
        if let Some(settings) = self.store.read_document(&path).await? {
            return Ok(settings);
        }

        let settings = GuildSettings::default();
        self.save(guild_id, &settings).await?;

        tracing::debug!("Created default settings for guild {}", guild_id);

        Ok(settings)
    }
}
