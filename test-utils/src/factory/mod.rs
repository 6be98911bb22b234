//! Factory methods for creating test documents.
//!
//! Factories build settings documents as raw JSON values with sensible defaults, so tests can
//! describe exactly what is on disk, including partial documents, unknown keys and the legacy
//! layouts written by older versions of the bot.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild_id = factory::helpers::next_id();
//! let document = factory::settings::SettingsDocumentFactory::new()
//!     .bot_enabled(false)
//!     .without("dm_message")
//!     .build();
//! ```

pub mod helpers;
pub mod settings;
