//! Domain models for reply prompts.
//!
//! A reply prompt asks an admin to type a settings value as their next chat message in the
//! channel where the prompt was issued.

/// Settings field a reply prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptField {
    /// Greeting sent to new members (`dm_message`).
    Greeting,
    /// Message sent to disconnected members (`kick_message`).
    KickMessage,
}

impl PromptField {
    /// Human-readable name used in prompt and confirmation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Greeting => "greeting message",
            Self::KickMessage => "kick message",
        }
    }

    /// Confirmation posted once a reply has been saved.
    pub fn updated_message(self) -> &'static str {
        match self {
            Self::Greeting => "Greeting message updated successfully.",
            Self::KickMessage => "Kick message updated successfully.",
        }
    }
}

/// A prompt that has been answered and consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedPrompt {
    /// Field the reply should be written to.
    pub field: PromptField,
    /// Channel the prompt was issued in.
    pub channel_id: u64,
}
