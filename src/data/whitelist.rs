//! Whitelist repository for per-guild `whitelist.json` documents.

use crate::{data::store::ConfigStore, error::store::StoreError, model::whitelist::Whitelist};

/// Repository providing access to guild whitelist documents.
pub struct WhitelistRepository<'a> {
    store: &'a ConfigStore,
}

impl<'a> WhitelistRepository<'a> {
    /// Creates a new WhitelistRepository instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the document store
    ///
    /// # Returns
    /// - `WhitelistRepository` - New repository instance
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// Loads a guild's whitelist, creating an empty document if none exists.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Whitelist)` - Stored whitelist with duplicates collapsed
    /// - `Err(StoreError::Corrupt)` - Document is not an array of strings
    /// - `Err(StoreError::Io)` - Document could not be read or created
    pub async fn load(&self, guild_id: u64) -> Result<Whitelist, StoreError> {
        let path = self.store.whitelist_path(guild_id);
        if let Some(whitelist) = self.store.read_document(&path).await? {
            return Ok(whitelist);
        }

        let _guard = self.store.lock_guild(guild_id).await;
        self.load_or_create(guild_id).await
    }

    /// Overwrites a guild's whitelist document.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `whitelist` - Full whitelist to persist
    ///
    /// # Returns
    /// - `Ok(())` - Document written
    /// - `Err(StoreError::Io)` - Write failed
    pub async fn save(&self, guild_id: u64, whitelist: &Whitelist) -> Result<(), StoreError> {
        self.store
            .write_document(&self.store.whitelist_path(guild_id), whitelist)
            .await
    }

    /// Applies a single change to a guild's whitelist under the guild lock.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `change` - Mutation to apply; its return value is passed through
    ///
    /// # Returns
    /// - `Ok(R)` - Value returned by `change`, after the whitelist was persisted
    /// - `Err(StoreError)` - Load or save failed; nothing was written
    pub async fn update<F, R>(&self, guild_id: u64, change: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Whitelist) -> R,
    {
        let _guard = self.store.lock_guild(guild_id).await;

        let mut whitelist = self.load_or_create(guild_id).await?;
        let result = change(&mut whitelist);
        self.save(guild_id, &whitelist).await?;

        Ok(result)
    }

    /// Reads the whitelist document, writing an empty one if it is absent.
    ///
    /// Caller must hold the guild lock.
    pub(crate) async fn load_or_create(&self, guild_id: u64) -> Result<Whitelist, StoreError> {
        let path = self.store.whitelist_path(guild_id);
        if let Some(whitelist) = self.store.read_document(&path).await? {
            return Ok(whitelist);
        }

        let whitelist = Whitelist::default();
        self.save(guild_id, &whitelist).await?;

        Ok(whitelist)
    }
}
