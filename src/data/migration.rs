//! One-time migration of legacy settings documents.
//!
//! Older versions of the bot wrote two shapes of `settings.json`: one embedding the whitelist
//! as a `whitelist` array and one storing the log channel under `log_channel`. The canonical
//! layout keeps the whitelist only in `whitelist.json` and the log channel only under
//! `logs_channel`. The migration rewrites legacy documents into that layout and is safe to run
//! on every startup: already-migrated documents are left untouched.

use serde_json::{Map, Value};

use crate::{
    data::{store::ConfigStore, whitelist::WhitelistRepository},
    error::store::StoreError,
};

const LEGACY_WHITELIST_KEY: &str = "whitelist";
const LEGACY_LOG_CHANNEL_KEY: &str = "log_channel";
const LOGS_CHANNEL_KEY: &str = "logs_channel";

/// Counts reported after migrating every guild directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Guilds whose settings document was rewritten.
    pub migrated: usize,
    /// Guilds skipped because their documents could not be read or written.
    pub failed: usize,
}

/// Migrates every guild directory under the store root.
///
/// A failure for one guild is logged and counted but does not stop the others from being
/// migrated.
///
/// # Arguments
/// - `store` - Document store to migrate
///
/// # Returns
/// - `Ok(MigrationReport)` - Per-guild outcome counts
/// - `Err(StoreError::Io)` - The store root could not be listed
pub async fn migrate_legacy_documents(store: &ConfigStore) -> Result<MigrationReport, StoreError> {
    let mut report = MigrationReport::default();

    for guild_id in store.guild_ids().await? {
        match migrate_guild(store, guild_id).await {
            Ok(true) => {
                report.migrated += 1;
                tracing::info!("Migrated legacy settings for guild {}", guild_id);
            }
            Ok(false) => {}
            Err(e) => {
                report.failed += 1;
                tracing::error!("Failed to migrate settings for guild {}: {}", guild_id, e);
            }
        }
    }

    Ok(report)
}

/// Migrates a single guild's settings document.
///
/// Moves any embedded whitelist entries into `whitelist.json` (union with the existing
/// whitelist, no duplicates) and renames `log_channel` to `logs_channel` unless the guild
/// already has a `logs_channel` value.
///
/// # Arguments
/// - `store` - Document store
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `Ok(true)` - The settings document was rewritten
/// - `Ok(false)` - Nothing to migrate (no document or no legacy keys)
/// - `Err(StoreError)` - Documents could not be read or written
pub async fn migrate_guild(store: &ConfigStore, guild_id: u64) -> Result<bool, StoreError> {
    let _guard = store.lock_guild(guild_id).await;

    let path = store.settings_path(guild_id);
    let Some(mut document) = store.read_document::<Map<String, Value>>(&path).await? else {
        return Ok(false);
    };

    let mut changed = false;

    if let Some(embedded) = document.remove(LEGACY_WHITELIST_KEY) {
        let entries = legacy_whitelist_entries(&embedded);
        if !entries.is_empty() {
            let repo = WhitelistRepository::new(store);
            let mut whitelist = repo.load_or_create(guild_id).await?;
            let added = entries
                .into_iter()
                .filter(|id| whitelist.insert(id.clone()))
                .count();
            repo.save(guild_id, &whitelist).await?;

            tracing::debug!(
                "Moved {} embedded whitelist entries for guild {}",
                added,
                guild_id
            );
        }
        changed = true;
    }

    if let Some(log_channel) = document.remove(LEGACY_LOG_CHANNEL_KEY) {
        let has_logs_channel = document
            .get(LOGS_CHANNEL_KEY)
            .is_some_and(|value| !value.is_null());
        if !has_logs_channel {
            document.insert(LOGS_CHANNEL_KEY.to_string(), log_channel);
        }
        changed = true;
    }

    if changed {
        store.write_document(&path, &document).await?;
    }

    Ok(changed)
}

/// Extracts member IDs from an embedded whitelist value.
///
/// Historical documents stored IDs as strings; numeric entries are accepted as well.
fn legacy_whitelist_entries(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        })
        .collect()
}
