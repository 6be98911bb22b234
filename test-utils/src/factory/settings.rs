//! Settings document factory.
//!
//! Builds `settings.json` contents as JSON values. Starts from the full default document and
//! lets tests override, drop or add keys.

use serde_json::{json, Map, Value};

/// Factory for settings documents with customizable keys.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::settings::SettingsDocumentFactory;
///
/// let document = SettingsDocumentFactory::new()
///     .kick_message("Stay active!")
///     .logs_channel(Some(42))
///     .build();
/// ```
pub struct SettingsDocumentFactory {
    document: Map<String, Value>,
}

impl SettingsDocumentFactory {
    /// Creates a factory holding the full default document.
    ///
    /// # Returns
    /// - `SettingsDocumentFactory` - New factory instance with defaults
    pub fn new() -> Self {
        let mut document = Map::new();
        document.insert("enabled".to_string(), json!(true));
        document.insert("join_messages".to_string(), json!(true));
        document.insert("whitelist_enabled".to_string(), json!(false));
        document.insert("logs_channel".to_string(), Value::Null);
        document.insert("dm_message".to_string(), json!("Welcome to the server!"));
        document.insert(
            "kick_message".to_string(),
            json!("You have been disconnected from the voice channel."),
        );
        document.insert("bot_enabled".to_string(), json!(true));
        Self { document }
    }

    pub fn bot_enabled(self, value: bool) -> Self {
        self.with("bot_enabled", json!(value))
    }

    pub fn join_messages(self, value: bool) -> Self {
        self.with("join_messages", json!(value))
    }

    pub fn kick_message(self, value: &str) -> Self {
        self.with("kick_message", json!(value))
    }

    pub fn dm_message(self, value: &str) -> Self {
        self.with("dm_message", json!(value))
    }

    pub fn logs_channel(self, value: Option<u64>) -> Self {
        self.with("logs_channel", json!(value))
    }

    /// Sets an arbitrary key, including keys the bot does not know about.
    ///
    /// # Arguments
    /// - `key` - Document key
    /// - `value` - Value to store
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.document.insert(key.to_string(), value);
        self
    }

    /// Removes a key so the document is only partially specified.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn without(mut self, key: &str) -> Self {
        self.document.remove(key);
        self
    }

    /// Adds the embedded `whitelist` array older versions stored in settings.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn legacy_whitelist(self, members: &[&str]) -> Self {
        self.with("whitelist", json!(members))
    }

    /// Stores the log channel under the legacy `log_channel` key instead of `logs_channel`.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn legacy_log_channel(self, channel_id: u64) -> Self {
        self.without("logs_channel").with("log_channel", json!(channel_id))
    }

    pub fn build(self) -> Value {
        Value::Object(self.document)
    }
}

impl Default for SettingsDocumentFactory {
    fn default() -> Self {
        Self::new()
    }
}
