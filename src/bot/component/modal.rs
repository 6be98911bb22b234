//! Modals opened from the settings menu and their submissions.

use serenity::all::{
    ActionRowComponent, Context, CreateActionRow, CreateInputText, CreateInteractionResponse,
    CreateModal, GuildId, InputTextStyle, ModalInteraction,
};

use crate::{
    bot::{
        lookup,
        response::{self, Respondable},
    },
    data::ConfigStore,
    error::AppError,
    model::prompt::PromptField,
    service::{settings::SettingsService, whitelist::WhitelistService},
    util::parse::{parse_channel_id, parse_user_id},
};

/// Custom ID of the single text input every modal carries.
const INPUT_ID: &str = "value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    WhitelistAdd,
    WhitelistRemove,
    LogChannel,
    KickMessage,
}

impl ModalKind {
    const ALL: [ModalKind; 4] = [
        Self::WhitelistAdd,
        Self::WhitelistRemove,
        Self::LogChannel,
        Self::KickMessage,
    ];

    pub fn custom_id(self) -> &'static str {
        match self {
            Self::WhitelistAdd => "modal:whitelist_add",
            Self::WhitelistRemove => "modal:whitelist_remove",
            Self::LogChannel => "modal:log_channel",
            Self::KickMessage => "modal:kick_message",
        }
    }

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.custom_id() == custom_id)
    }

    fn title(self) -> &'static str {
        match self {
            Self::WhitelistAdd => "Add to Whitelist",
            Self::WhitelistRemove => "Remove from Whitelist",
            Self::LogChannel => "Set Log Channel",
            Self::KickMessage => "Set Kick Message",
        }
    }

    fn input(self) -> CreateInputText {
        match self {
            Self::WhitelistAdd | Self::WhitelistRemove => {
                CreateInputText::new(InputTextStyle::Short, "User ID", INPUT_ID)
                    .placeholder("Enter the user ID")
                    .min_length(17)
                    .max_length(20)
                    .required(true)
            }
            Self::LogChannel => CreateInputText::new(InputTextStyle::Short, "Channel ID", INPUT_ID)
                .placeholder("Enter the channel ID")
                .min_length(17)
                .max_length(20)
                .required(true),
            Self::KickMessage => {
                CreateInputText::new(InputTextStyle::Paragraph, "Kick Message", INPUT_ID)
                    .placeholder("Enter the message to send when kicking users")
                    .max_length(1000)
                    .required(true)
            }
        }
    }

    /// Response that opens this modal.
    pub fn response(self) -> CreateInteractionResponse {
        CreateInteractionResponse::Modal(
            CreateModal::new(self.custom_id(), self.title())
                .components(vec![CreateActionRow::InputText(self.input())]),
        )
    }
}

/// Extracts the submitted text of the modal's input.
fn submitted_value(interaction: &ModalInteraction) -> &str {
    interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == INPUT_ID => {
                input.value.as_deref()
            }
            _ => None,
        })
        .unwrap_or_default()
}

async fn submit(
    kind: ModalKind,
    store: &ConfigStore,
    ctx: &Context,
    guild_id: GuildId,
    value: &str,
) -> Result<CreateInteractionResponse, AppError> {
    match kind {
        ModalKind::WhitelistAdd => {
            let user_id = parse_user_id(value)?;
            let member = lookup::find_member(ctx, guild_id, user_id).await?;
            let name = member.display_name();

            let content = if WhitelistService::new(store)
                .add(guild_id.get(), user_id)
                .await?
            {
                format!("{} has been added to the whitelist.", name)
            } else {
                format!("{} is already in the whitelist.", name)
            };

            Ok(response::message(content, false))
        }
        ModalKind::WhitelistRemove => {
            let user_id = parse_user_id(value)?;

            if !WhitelistService::new(store)
                .remove(guild_id.get(), user_id)
                .await?
            {
                return Ok(response::message("This user is not in the whitelist.", true));
            }

            // The member may have left; the ID is removed either way
            let name = match lookup::find_member(ctx, guild_id, user_id).await {
                Ok(member) => member.display_name().to_string(),
                Err(_) => format!("User (ID: {})", user_id),
            };

            Ok(response::message(
                format!("{} has been removed from the whitelist.", name),
                false,
            ))
        }
        ModalKind::LogChannel => {
            let channel_id = parse_channel_id(value)?;
            let channel_id = lookup::require_text_channel(ctx, guild_id, channel_id).await?;

            SettingsService::new(store)
                .set_log_channel(guild_id.get(), Some(channel_id))
                .await?;

            Ok(response::message(
                format!("Log channel set to <#{}>", channel_id),
                true,
            ))
        }
        ModalKind::KickMessage => {
            SettingsService::new(store)
                .set_kick_message(guild_id.get(), value)
                .await?;

            Ok(response::message(
                PromptField::KickMessage.updated_message(),
                true,
            ))
        }
    }
}

/// Handles a modal submission.
///
/// # Arguments
/// - `store` - Document store
/// - `ctx` - Discord context
/// - `interaction` - Modal interaction to answer
pub async fn handle_modal(store: &ConfigStore, ctx: &Context, interaction: &ModalInteraction) {
    let respond = Respondable::Modal(interaction);

    let Some(kind) = ModalKind::from_custom_id(&interaction.data.custom_id) else {
        tracing::debug!(
            "Ignoring modal with unknown custom id {}",
            interaction.data.custom_id
        );
        return;
    };

    let Some(guild_id) = interaction.guild_id else {
        respond.send(ctx, response::message(response::GUILD_ONLY, true)).await;
        return;
    };

    if !response::is_admin(interaction.member.as_ref()) {
        respond
            .send(ctx, response::message(response::MISSING_PERMISSIONS, true))
            .await;
        return;
    }

    let response = submit(kind, store, ctx, guild_id, submitted_value(interaction))
        .await
        .unwrap_or_else(|e| {
            response::message(response::describe_error(&e, "handle modal submission"), true)
        });

    respond.send(ctx, response).await;
}
