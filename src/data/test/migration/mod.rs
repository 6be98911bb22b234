use crate::{
    data::{
        migration::{migrate_guild, migrate_legacy_documents, MigrationReport},
        settings::SettingsRepository,
        store::ConfigStore,
        whitelist::WhitelistRepository,
    },
    error::AppError,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory::settings::SettingsDocumentFactory};

mod migrate_guild;
mod migrate_legacy_documents;
