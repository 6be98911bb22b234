//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. It logs the connected user and an invite link, then
//! registers the global slash commands.

use serenity::all::{Command, Context, Permissions, Ready};

use crate::bot::command;

/// Permissions requested by the invite link.
pub fn invite_permissions() -> Permissions {
    Permissions::ADMINISTRATOR
        | Permissions::VIEW_CHANNEL
        | Permissions::SEND_MESSAGES
        | Permissions::MANAGE_MESSAGES
        | Permissions::READ_MESSAGE_HISTORY
        | Permissions::MOVE_MEMBERS
        | Permissions::SEND_MESSAGES_IN_THREADS
}

/// Builds the OAuth2 URL for adding the bot to a guild.
///
/// # Arguments
/// - `application_id` - Discord application ID of the bot
///
/// # Returns
/// - `String` - Invite URL with the bot and slash-command scopes
pub fn invite_url(application_id: u64) -> String {
    format!(
        "https://discord.com/api/oauth2/authorize?client_id={}&permissions={}&scope=bot%20applications.commands",
        application_id,
        invite_permissions().bits()
    )
}

/// Handles the ready event when the bot connects to Discord.
///
/// Fires on every (re)connection, so command registration is repeated each time; Discord
/// treats an identical command set as a no-op.
///
/// # Arguments
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user and application information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
    tracing::info!(
        "Invite {} to your server using this link: {}",
        ready.user.name,
        invite_url(ready.application.id.get())
    );

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Synced {} command(s)", commands.len()),
        Err(e) => tracing::error!("Failed to sync slash commands: {:?}", e),
    }
}
