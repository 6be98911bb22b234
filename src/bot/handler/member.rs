use serenity::all::{Context, CreateMessage, Member};

use crate::{data::ConfigStore, service::settings::SettingsService};

/// Handles a member joining a guild by sending the configured greeting
pub async fn handle_guild_member_addition(store: &ConfigStore, ctx: Context, new_member: Member) {
    if new_member.user.bot {
        return;
    }

    let guild_id = new_member.guild_id.get();

    let greeting = match SettingsService::new(store).join_greeting(guild_id).await {
        Ok(Some(greeting)) => greeting,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to load settings for guild {}: {:?}", guild_id, e);
            return;
        }
    };

    if let Err(e) = new_member
        .user
        .direct_message(&ctx, CreateMessage::new().content(greeting))
        .await
    {
        tracing::warn!(
            "Failed to send greeting to member {} in guild {}: {:?}",
            new_member.user.id,
            guild_id,
            e
        );
    } else {
        tracing::debug!(
            "Sent greeting to member {} in guild {}",
            new_member.user.id,
            guild_id
        );
    }
}
