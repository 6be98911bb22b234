//! Test factory for creating Serenity VoiceState objects.

use serenity::all::VoiceState;

/// Creates a test Serenity VoiceState with customizable fields.
///
/// The member payload is omitted, matching what Discord sends when the member is not in the
/// cache. Server-side mute/deafen, streaming and video flags are all false.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `user_id` - Discord user ID of the member
/// - `channel_id` - Voice channel the member is connected to, `None` when disconnected
/// - `self_mute` - Member muted themselves
/// - `self_deaf` - Member deafened themselves
///
/// # Returns
/// - `VoiceState` - A valid Serenity VoiceState struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(
    guild_id: u64,
    user_id: u64,
    channel_id: Option<u64>,
    self_mute: bool,
    self_deaf: bool,
) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": null,
        "session_id": "test-session",
        "deaf": false,
        "mute": false,
        "self_deaf": self_deaf,
        "self_mute": self_mute,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
