//! Inputs and outputs of the voice moderation decision.

/// The parts of a voice-state update the moderation decision looks at.
///
/// Built by the voice-state handler from the Discord event so the decision itself has no
/// dependency on Serenity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceStateSnapshot {
    /// Discord user ID of the member whose state changed.
    pub member_id: u64,
    /// Whether the member is a bot account.
    pub is_bot: bool,
    /// Member muted themselves.
    pub self_mute: bool,
    /// Member deafened themselves.
    pub self_deaf: bool,
    /// Member is connected to a voice channel after the update.
    pub in_voice_channel: bool,
}

/// Outcome of evaluating a voice-state update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the member alone.
    NoAction,
    /// Disconnect the member from voice, DM them `kick_message` and report to `log_channel`
    /// when one is configured.
    Disconnect {
        kick_message: String,
        log_channel: Option<u64>,
    },
}
