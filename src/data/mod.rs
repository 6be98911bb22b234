//! Document repository layer.
//!
//! Per-guild settings and whitelist documents are stored as JSON files under a configurable
//! root directory, one sub-directory per guild. Repositories convert between those documents
//! and the domain models in `model`, create default documents lazily and serialize
//! load-modify-save cycles per guild.

pub mod migration;
pub mod settings;
pub mod store;
pub mod whitelist;

pub use settings::SettingsRepository;
pub use store::ConfigStore;
pub use whitelist::WhitelistRepository;

#[cfg(test)]
mod test;
