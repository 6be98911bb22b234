//! Per-guild settings document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Greeting sent to new members when join messages are enabled.
pub const DEFAULT_DM_MESSAGE: &str = "Welcome to the server!";

/// Message sent to a member after they are disconnected from voice.
pub const DEFAULT_KICK_MESSAGE: &str = "You have been disconnected from the voice channel.";

/// Settings for a single guild, stored as `settings.json`.
///
/// Every field has a default, so a stored document missing any key is completed with
/// defaults when it is read. Keys this version does not know about are collected into
/// `extra` and written back unchanged, which keeps documents written by newer or older
/// versions intact across a load/save round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildSettings {
    /// Legacy master switch. Round-tripped but not consulted; `bot_enabled` is the switch
    /// moderation honours.
    pub enabled: bool,
    /// Whether new members receive `dm_message` when they join.
    pub join_messages: bool,
    /// Legacy flag. Whitelist membership is always honoured regardless of its value.
    pub whitelist_enabled: bool,
    /// Channel that receives a notice for every disconnect.
    pub logs_channel: Option<u64>,
    /// Greeting text for new members.
    pub dm_message: String,
    /// Text sent by direct message to a disconnected member.
    pub kick_message: String,
    /// Master on/off switch for voice moderation.
    pub bot_enabled: bool,
    /// Unrecognised keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GuildSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            join_messages: true,
            whitelist_enabled: false,
            logs_channel: None,
            dm_message: DEFAULT_DM_MESSAGE.to_string(),
            kick_message: DEFAULT_KICK_MESSAGE.to_string(),
            bot_enabled: true,
            extra: Map::new(),
        }
    }
}

impl GuildSettings {
    /// Kick message to send, falling back to the default when the stored one is blank.
    pub fn effective_kick_message(&self) -> &str {
        if self.kick_message.trim().is_empty() {
            DEFAULT_KICK_MESSAGE
        } else {
            &self.kick_message
        }
    }

    /// Channel to post disconnect notices in, treating a stored `0` as unset.
    pub fn log_channel(&self) -> Option<u64> {
        self.logs_channel.filter(|channel_id| *channel_id != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests that an empty document deserializes to the defaults.
    ///
    /// Expected: Ok(GuildSettings::default())
    #[test]
    fn empty_document_uses_defaults() {
        let settings: GuildSettings = serde_json::from_value(json!({})).unwrap();

        assert_eq!(settings, GuildSettings::default());
    }

    /// Tests that present keys win over defaults and missing keys are filled.
    ///
    /// Expected: stored kick_message and bot_enabled kept, everything else default
    #[test]
    fn present_keys_override_defaults() {
        let settings: GuildSettings = serde_json::from_value(json!({
            "kick_message": "No AFK in voice",
            "bot_enabled": false,
        }))
        .unwrap();

        assert_eq!(settings.kick_message, "No AFK in voice");
        assert!(!settings.bot_enabled);
        assert!(settings.join_messages);
        assert_eq!(settings.dm_message, DEFAULT_DM_MESSAGE);
        assert_eq!(settings.logs_channel, None);
    }

    /// Tests that unknown keys are kept in `extra` and serialized back out.
    ///
    /// Expected: "theme" survives deserialize + serialize
    #[test]
    fn unknown_keys_round_trip() {
        let settings: GuildSettings = serde_json::from_value(json!({
            "theme": "dark",
            "logs_channel": 123456789012345678u64,
        }))
        .unwrap();

        assert_eq!(settings.extra.get("theme"), Some(&json!("dark")));
        assert_eq!(settings.logs_channel, Some(123456789012345678));

        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["theme"], json!("dark"));
        assert_eq!(value["logs_channel"], json!(123456789012345678u64));
    }

    /// Tests that a blank kick message falls back to the default text.
    ///
    /// Expected: DEFAULT_KICK_MESSAGE
    #[test]
    fn blank_kick_message_falls_back() {
        let settings = GuildSettings {
            kick_message: "   ".to_string(),
            ..Default::default()
        };

        assert_eq!(settings.effective_kick_message(), DEFAULT_KICK_MESSAGE);
    }

    /// Tests that a stored log channel of zero counts as no log channel.
    ///
    /// Expected: None for 0, the stored ID otherwise
    #[test]
    fn zero_log_channel_is_unset() {
        let settings: GuildSettings =
            serde_json::from_value(json!({ "logs_channel": 0 })).unwrap();

        assert_eq!(settings.logs_channel, Some(0));
        assert_eq!(settings.log_channel(), None);

        let settings = GuildSettings {
            logs_channel: Some(42),
            ..Default::default()
        };
        assert_eq!(settings.log_channel(), Some(42));
    }
}
