use serenity::all::{
    ChannelType, CommandInteraction, CreateInteractionResponse, GuildId, PartialChannel,
    ResolvedValue,
};

use crate::{
    bot::{component::menu, response},
    data::ConfigStore,
    error::{validation::ValidationError, AppError},
    model::prompt::PromptField,
    service::settings::SettingsService,
};

fn channel_option<'a>(command: &'a CommandInteraction) -> Option<&'a PartialChannel> {
    command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::Channel(channel) if option.name == "channel" => Some(channel),
            _ => None,
        })
}

fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == name => Some(value),
            _ => None,
        })
}

/// `/settings`: posts the interactive settings menu
pub async fn settings(
    store: &ConfigStore,
    guild_id: GuildId,
) -> Result<CreateInteractionResponse, AppError> {
    let settings = SettingsService::new(store).get(guild_id.get()).await?;

    Ok(CreateInteractionResponse::Message(menu::menu_message(&settings)))
}

/// `/set_log_channel <channel>`
pub async fn set_log_channel(
    store: &ConfigStore,
    guild_id: GuildId,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponse, AppError> {
    let channel = channel_option(command)
        .ok_or_else(|| ValidationError::InvalidChannelId(String::new()))?;

    if channel.kind != ChannelType::Text {
        return Err(ValidationError::NotATextChannel(channel.id.get()).into());
    }

    SettingsService::new(store)
        .set_log_channel(guild_id.get(), Some(channel.id.get()))
        .await?;

    Ok(response::message(
        format!("Log channel set to <#{}>", channel.id),
        false,
    ))
}

/// `/set_kick_message <message>`
pub async fn set_kick_message(
    store: &ConfigStore,
    guild_id: GuildId,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponse, AppError> {
    let message = string_option(command, "message").unwrap_or_default();

    SettingsService::new(store)
        .set_kick_message(guild_id.get(), message)
        .await?;

    Ok(response::message(
        PromptField::KickMessage.updated_message(),
        false,
    ))
}

/// `/toggle_bot`
pub async fn toggle_bot(
    store: &ConfigStore,
    guild_id: GuildId,
) -> Result<CreateInteractionResponse, AppError> {
    let settings = SettingsService::new(store).toggle_bot(guild_id.get()).await?;
    let status = if settings.bot_enabled {
        "enabled"
    } else {
        "disabled"
    };

    Ok(response::message(format!("Bot has been {}.", status), false))
}
