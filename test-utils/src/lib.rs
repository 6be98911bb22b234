//! VCGuard Test Utils
//!
//! Provides shared testing utilities for the bot's unit and integration tests. This crate
//! offers a builder pattern for creating test contexts backed by a temporary config directory
//! with pre-seeded guild documents, plus factories for settings documents and Serenity objects.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for seeding guild documents before a test
//! - **TestContext**: Temporary config root plus helpers to inspect documents on disk
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Settings document builders, including legacy layouts
//! - **serenity**: Serenity model objects deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_settings(123, serde_json::json!({ "bot_enabled": false }))
//!         .build()
//!         .await?;
//!
//!     let store = ConfigStore::new(test.root());
//!     // Perform store operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
