//! Domain models shared by the data, service and bot layers.
//!
//! These types carry no Discord or filesystem dependencies; conversion from Serenity types
//! happens in the bot handlers and conversion to and from JSON documents happens in the
//! data layer.

pub mod moderation;
pub mod prompt;
pub mod settings;
pub mod whitelist;
