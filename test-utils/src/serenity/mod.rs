//! Test factories for creating Serenity API objects.
//!
//! Serenity model structs are `#[non_exhaustive]`, so they cannot be built with struct
//! literals outside the crate. These factories create valid objects by deserializing JSON,
//! simulating what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_voice_state;
//!
//! // Member 555 connected to channel 42, self-muted and self-deafened
//! let state = create_test_voice_state(123, 555, Some(42), true, true);
//! ```

pub mod voice_state;

pub use voice_state::create_test_voice_state;
