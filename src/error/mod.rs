//! Error types for the bot.
//!
//! `AppError` is the top-level error type returned by services and startup code. It wraps
//! the domain-specific errors so that handlers can decide how each one is surfaced: storage
//! errors are logged and abort the current event, validation errors are reported back to the
//! admin who supplied the input, and Discord errors are logged.

pub mod config;
pub mod store;
pub mod validation;

use thiserror::Error;

use crate::error::{config::ConfigError, store::StoreError, validation::ValidationError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Reading or writing a guild's settings or whitelist document failed.
    ///
    /// Scoped to the guild being processed; never affects other guilds.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// User-supplied input could not be accepted.
    ///
    /// The message is safe to show to the admin who supplied the input.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Logging subscriber could not be installed.
    #[error("Failed to initialise logging: {0}")]
    LoggingErr(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message shown to the admin whose interaction produced this error.
    ///
    /// Validation errors are echoed verbatim; everything else gets a generic message so
    /// file paths and API details stay in the logs.
    ///
    /// # Returns
    /// - `String` - Ephemeral response content for the interaction
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationErr(err) => err.to_string(),
            _ => "An error occurred while processing your request.".to_string(),
        }
    }
}
