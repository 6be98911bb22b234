use serde_json::Value;

use crate::{
    context::{TestContext, SETTINGS_FILE, WHITELIST_FILE},
    error::TestError,
};

/// Builder for creating test contexts with pre-seeded guild documents.
///
/// Provides a fluent interface for describing the documents that should exist on disk before
/// the test runs, then call `build()` to create the temporary config root and write them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_settings(123, json!({ "kick_message": "Bye" }))
///     .with_whitelist(123, json!(["10", "20"]))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Documents to write during `build()`, as (guild_id, file name, raw contents).
    ///
    /// Written in the order they were added; a later entry for the same file replaces an
    /// earlier one.
    documents: Vec<(u64, &'static str, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no documents configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Seeds a guild's `settings.json` with the given JSON value.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the document belongs to
    /// - `document` - Settings document; may be partial or contain unknown keys
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_settings(self, guild_id: u64, document: Value) -> Self {
        self.with_raw_settings(guild_id, pretty(&document))
    }

    /// Seeds a guild's `settings.json` with raw, possibly invalid, contents.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the document belongs to
    /// - `contents` - Raw file contents
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_settings(mut self, guild_id: u64, contents: impl Into<String>) -> Self {
        self.documents.push((guild_id, SETTINGS_FILE, contents.into()));
        self
    }

    /// Seeds a guild's `whitelist.json` with the given JSON value.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the document belongs to
    /// - `document` - Whitelist document, normally an array of ID strings
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_whitelist(self, guild_id: u64, document: Value) -> Self {
        self.with_raw_whitelist(guild_id, pretty(&document))
    }

    /// Seeds a guild's `whitelist.json` with raw, possibly invalid, contents.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_whitelist(mut self, guild_id: u64, contents: impl Into<String>) -> Self {
        self.documents
            .push((guild_id, WHITELIST_FILE, contents.into()));
        self
    }

    /// Builds the test context and writes every configured document.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose root contains the seeded documents
    /// - `Err(TestError::Io)` - Temporary directory or a document could not be written
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        for (guild_id, file, contents) in self.documents {
            context.write_raw(guild_id, file, &contents).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn pretty(document: &Value) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string())
}
