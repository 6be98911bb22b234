use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_CONFIG_DIR: &str = "config";

pub struct Config {
    pub discord_bot_token: String,

    /// Root directory holding one sub-directory of documents per guild.
    pub config_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("BOT_TOKEN".to_string()))?,
            config_dir: std::env::var("CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR)),
        })
    }
}
