//! Settings menu embed and button handling.

use serenity::all::{
    ButtonStyle, ComponentInteraction, Context, CreateActionRow, CreateButton, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, GuildId,
};

use crate::{
    bot::{
        component::{modal::ModalKind, now, ComponentId, MenuButton},
        response::{self, Respondable},
    },
    data::ConfigStore,
    model::{prompt::PromptField, settings::GuildSettings},
    service::{
        prompt::{PromptService, PROMPT_TTL_SECONDS},
        settings::SettingsService,
    },
};

const EMBED_COLOR: u32 = 0x00ff00;

fn status(enabled: bool) -> String {
    format!("{} Enabled", if enabled { "✅" } else { "❌" })
}

/// Builds the "Settings Menu" embed for a guild's settings.
///
/// The log channel field is only shown when one is configured.
pub fn settings_embed(settings: &GuildSettings) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Settings Menu")
        .color(EMBED_COLOR)
        .field("Bot Status", status(settings.bot_enabled), false)
        .field("Join Messages", status(settings.join_messages), false);

    if let Some(channel_id) = settings.log_channel() {
        embed = embed.field("Log Channel", format!("<#{}>", channel_id), false);
    }

    embed
}

fn button(button: MenuButton, issued_at: i64, disabled: bool) -> CreateButton {
    let (label, style) = match button {
        MenuButton::AddWhitelist => ("Add to Whitelist", ButtonStyle::Primary),
        MenuButton::RemoveWhitelist => ("Remove from Whitelist", ButtonStyle::Primary),
        MenuButton::SetLogChannel => ("Set Log Channel", ButtonStyle::Primary),
        MenuButton::SetKickMessage => ("Set Kick Message", ButtonStyle::Primary),
        MenuButton::SetGreeting => ("Set Greeting", ButtonStyle::Primary),
        MenuButton::ToggleJoinMessages => ("Toggle Join Messages", ButtonStyle::Primary),
        MenuButton::ToggleBot => ("Toggle Bot", ButtonStyle::Danger),
    };

    CreateButton::new(ComponentId::Menu { button, issued_at }.encode())
        .label(label)
        .style(style)
        .disabled(disabled)
}

/// Builds the menu's button rows, all stamped with `issued_at`.
pub fn menu_rows(issued_at: i64, disabled: bool) -> Vec<CreateActionRow> {
    let row = |buttons: &[MenuButton]| {
        CreateActionRow::Buttons(
            buttons
                .iter()
                .map(|b| button(*b, issued_at, disabled))
                .collect(),
        )
    };

    vec![
        row(&[MenuButton::AddWhitelist, MenuButton::RemoveWhitelist]),
        row(&[MenuButton::SetLogChannel, MenuButton::SetKickMessage]),
        row(&[MenuButton::ToggleJoinMessages, MenuButton::SetGreeting]),
        row(&[MenuButton::ToggleBot]),
    ]
}

/// Message content for a freshly rendered menu.
pub fn menu_message(settings: &GuildSettings) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .embed(settings_embed(settings))
        .components(menu_rows(now(), false))
}

/// Handles a click on one of the settings menu buttons.
///
/// Modal buttons open their modal, Set Greeting starts a reply prompt in the menu's channel
/// and the toggles flip their setting and re-render the menu in place with a fresh expiry.
pub async fn handle_menu_button(
    store: &ConfigStore,
    prompts: &PromptService,
    ctx: &Context,
    interaction: &ComponentInteraction,
    guild_id: GuildId,
    button: MenuButton,
) {
    let respond = Respondable::Component(interaction);
    let settings = SettingsService::new(store);

    let result = match button {
        MenuButton::AddWhitelist => Ok(ModalKind::WhitelistAdd.response()),
        MenuButton::RemoveWhitelist => Ok(ModalKind::WhitelistRemove.response()),
        MenuButton::SetLogChannel => Ok(ModalKind::LogChannel.response()),
        MenuButton::SetKickMessage => Ok(ModalKind::KickMessage.response()),
        MenuButton::SetGreeting => {
            prompts
                .begin(
                    interaction.user.id.get(),
                    guild_id.get(),
                    interaction.channel_id.get(),
                    PromptField::Greeting,
                )
                .await;
            Ok(response::message(
                format!(
                    "Please type the new {} in this channel within {} seconds.",
                    PromptField::Greeting.label(),
                    PROMPT_TTL_SECONDS
                ),
                true,
            ))
        }
        MenuButton::ToggleJoinMessages => settings
            .toggle_join_messages(guild_id.get())
            .await
            .map(|s| CreateInteractionResponse::UpdateMessage(menu_message(&s))),
        MenuButton::ToggleBot => settings
            .toggle_bot(guild_id.get())
            .await
            .map(|s| CreateInteractionResponse::UpdateMessage(menu_message(&s))),
    };

    let response = result.unwrap_or_else(|e| {
        response::message(response::describe_error(&e, "handle settings menu click"), true)
    });

    respond.send(ctx, response).await;
}
