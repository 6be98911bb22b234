use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::{migration::migrate_legacy_documents, ConfigStore},
    error::AppError,
    service::prompt::{PromptService, PROMPT_TTL_SECONDS},
};

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::LoggingErr)` - A global subscriber was already set
pub fn init_tracing() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| AppError::LoggingErr(e.to_string()))
}

/// Opens the document store and migrates legacy documents.
///
/// Guild directories that fail to migrate are logged and left as they are; the bot still
/// starts and reports storage errors for those guilds as events arrive.
///
/// # Arguments
/// - `config` - Application configuration containing the config directory
///
/// # Returns
/// - `Ok(ConfigStore)` - Store rooted at the configured directory
/// - `Err(AppError::StoreErr)` - The config directory exists but could not be listed
pub async fn open_store(config: &Config) -> Result<ConfigStore, AppError> {
    let store = ConfigStore::new(&config.config_dir);

    let report = migrate_legacy_documents(&store).await?;
    if report.migrated > 0 || report.failed > 0 {
        tracing::info!(
            "Migrated {} legacy guild document(s), {} failed",
            report.migrated,
            report.failed
        );
    }

    tracing::info!("Using config directory {}", store.root().display());

    Ok(store)
}

/// Periodically drops reply prompts that expired without an answer.
pub fn spawn_prompt_sweeper(prompts: PromptService) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(PROMPT_TTL_SECONDS));
        loop {
            interval.tick().await;
            let purged = prompts.purge_expired().await;
            if purged > 0 {
                tracing::debug!("Dropped {} expired reply prompt(s)", purged);
            }
        }
    });
}
