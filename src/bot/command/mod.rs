//! Slash commands.
//!
//! All commands are registered globally, restricted to administrators through default
//! member permissions, and re-check the permission when invoked.

use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, Permissions,
};

use crate::{
    bot::response::{self, Respondable},
    data::ConfigStore,
};

pub mod settings;
pub mod whitelist;

fn admin_command(name: &str, description: &str) -> CreateCommand {
    CreateCommand::new(name)
        .description(description)
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

fn member_option(description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, "member", description).required(true)
}

/// Every slash command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        admin_command("settings", "Access the settings menu"),
        admin_command("set_log_channel", "Set the channel for logs").add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Text channel that receives disconnect logs",
            )
            .channel_types(vec![ChannelType::Text])
            .required(true),
        ),
        admin_command("set_kick_message", "Set custom message for kicks").add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "message",
                "Message sent to disconnected members",
            )
            .required(true),
        ),
        admin_command("toggle_bot", "Enable or disable the bot"),
        admin_command("whitelist_add", "Add a member to the whitelist")
            .add_option(member_option("Member to exempt from voice moderation")),
        admin_command("whitelist_remove", "Remove a member from the whitelist")
            .add_option(member_option("Member to remove from the whitelist")),
        admin_command("list_whitelist", "List all whitelisted members"),
    ]
}

/// Routes a slash command to its handler.
///
/// # Arguments
/// - `store` - Document store
/// - `ctx` - Discord context
/// - `command` - Command interaction to answer
pub async fn handle_command(store: &ConfigStore, ctx: &Context, command: &CommandInteraction) {
    let respond = Respondable::Command(command);

    let Some(guild_id) = command.guild_id else {
        respond.send(ctx, response::message(response::GUILD_ONLY, true)).await;
        return;
    };

    if !response::is_admin(command.member.as_deref()) {
        respond
            .send(ctx, response::message(response::MISSING_PERMISSIONS, true))
            .await;
        return;
    }

    let result = match command.data.name.as_str() {
        "settings" => settings::settings(store, guild_id).await,
        "set_log_channel" => settings::set_log_channel(store, guild_id, command).await,
        "set_kick_message" => settings::set_kick_message(store, guild_id, command).await,
        "toggle_bot" => settings::toggle_bot(store, guild_id).await,
        "whitelist_add" => whitelist::whitelist_add(store, guild_id, command).await,
        "whitelist_remove" => whitelist::whitelist_remove(store, guild_id, command).await,
        "list_whitelist" => whitelist::list_whitelist(store, ctx, guild_id).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    let response = result.unwrap_or_else(|e| {
        let action = format!("run /{}", command.data.name);
        response::message(response::describe_error(&e, &action), true)
    });

    respond.send(ctx, response).await;
}
