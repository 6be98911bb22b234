use thiserror::Error;

/// Rejected admin input.
///
/// Display text is shown to the admin as an ephemeral reply, so it is written as a
/// user-facing sentence.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was not a Discord user ID.
    #[error("Please enter a valid user ID.")]
    InvalidUserId(String),

    /// Input was not a Discord channel ID.
    #[error("Please enter a valid channel ID.")]
    InvalidChannelId(String),

    /// The channel exists but is not a text channel of this guild.
    #[error("Please enter a valid text channel ID.")]
    NotATextChannel(u64),

    /// The user is not a member of the guild.
    #[error("User not found in this server.")]
    MemberNotFound(u64),

    /// Free-text input was empty after trimming.
    #[error("The {0} cannot be empty.")]
    EmptyText(&'static str),
}
