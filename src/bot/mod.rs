//! Discord bot integration for voice moderation.
//!
//! The bot watches voice-state updates and disconnects members who are both self-muted and
//! self-deafened, greets new members by direct message and exposes its per-guild settings
//! through slash commands, an interactive settings menu and reply prompts.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data used to validate log channels
//! - `GUILD_VOICE_STATES` - Voice-state updates that drive moderation
//! - `GUILD_MEMBERS` - Member joins for the greeting DM (privileged intent)
//! - `GUILD_MESSAGES` - Messages answering reply prompts
//! - `MESSAGE_CONTENT` - Text of those messages (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod command;
pub mod component;
pub mod handler;
pub mod lookup;
pub mod response;
pub mod start;
