//! Shared helpers for answering interactions.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, Member, ModalInteraction,
};

use crate::error::AppError;

pub const MISSING_PERMISSIONS: &str = "You need administrator permissions to use this command.";
pub const GUILD_ONLY: &str = "This command can only be used in a server.";

/// Whether the interacting member holds the administrator permission.
///
/// Discord only fills `permissions` for members delivered with an interaction; anything
/// else is treated as not permitted.
pub fn is_admin(member: Option<&Member>) -> bool {
    member
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator())
}

/// Logs an error at the level it deserves and returns the text to show the admin.
///
/// Validation errors are expected input mistakes and only logged at debug.
pub fn describe_error(e: &AppError, action: &str) -> String {
    match e {
        AppError::ValidationErr(_) => tracing::debug!("Rejected input for {}: {}", action, e),
        _ => tracing::error!("Failed to {}: {:?}", action, e),
    }
    e.user_message()
}

pub fn message(content: impl Into<String>, ephemeral: bool) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(ephemeral),
    )
}

/// Interaction kinds that can be answered with a response.
pub enum Respondable<'a> {
    Command(&'a CommandInteraction),
    Component(&'a ComponentInteraction),
    Modal(&'a ModalInteraction),
}

impl Respondable<'_> {
    /// Sends a response, logging a failure instead of returning it.
    pub async fn send(&self, ctx: &Context, response: CreateInteractionResponse) {
        let result = match self {
            Self::Command(interaction) => interaction.create_response(&ctx.http, response).await,
            Self::Component(interaction) => interaction.create_response(&ctx.http, response).await,
            Self::Modal(interaction) => interaction.create_response(&ctx.http, response).await,
        };

        if let Err(e) = result {
            tracing::error!("Failed to respond to interaction: {:?}", e);
        }
    }
}
