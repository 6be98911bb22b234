use serenity::all::{Context, Message};

use crate::{
    bot::response::describe_error,
    data::ConfigStore,
    service::{prompt::PromptService, settings::SettingsService},
};

/// Handle message creation in a channel
///
/// Messages answering a pending reply prompt are written to the prompted settings field;
/// everything else is ignored.
pub async fn handle_message(
    store: &ConfigStore,
    prompts: &PromptService,
    ctx: Context,
    message: Message,
) {
    // Only guild messages from humans can answer a prompt
    if message.author.bot {
        return;
    }
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let user_id = message.author.id.get();
    if !prompts.is_pending(user_id, guild_id.get()).await {
        return;
    }

    let Some(accepted) = prompts
        .take(user_id, guild_id.get(), message.channel_id.get())
        .await
    else {
        return;
    };

    let reply = match SettingsService::new(store)
        .set_text(guild_id.get(), accepted.field, &message.content)
        .await
    {
        Ok(_) => {
            tracing::info!(
                "Updated {} for guild {} from reply prompt",
                accepted.field.label(),
                guild_id
            );
            accepted.field.updated_message().to_string()
        }
        Err(e) => describe_error(&e, "save prompt reply"),
    };

    if let Err(e) = message.reply(&ctx, reply).await {
        tracing::warn!(
            "Failed to confirm prompt reply in channel {}: {:?}",
            message.channel_id,
            e
        );
    }
}
