//! Voice-state event handler driving voice moderation.

use serenity::all::{Context, VoiceState};

use crate::{
    data::ConfigStore,
    model::moderation::VoiceStateSnapshot,
    service::moderation::{DiscordModerationActions, ModerationService},
};

/// Extracts the fields the moderation decision needs from a voice state.
///
/// # Arguments
/// - `state` - Voice state after the update
/// - `is_bot` - Whether the member is a bot account
///
/// # Returns
/// - `VoiceStateSnapshot` - Platform-independent view of the update
pub fn snapshot_from_voice_state(state: &VoiceState, is_bot: bool) -> VoiceStateSnapshot {
    VoiceStateSnapshot {
        member_id: state.user_id.get(),
        is_bot,
        self_mute: state.self_mute,
        self_deaf: state.self_deaf,
        in_voice_channel: state.channel_id.is_some(),
    }
}

/// Handles a voice-state update.
///
/// Resolves whether the member is a bot (fetching the member when the event carries no
/// member payload), evaluates the moderation decision for the guild and carries it out.
/// Storage errors abort only this event.
///
/// # Arguments
/// - `store` - Document store
/// - `ctx` - Discord context
/// - `_old` - Previous voice state, if cached
/// - `new` - Voice state after the update
pub async fn handle_voice_state_update(
    store: &ConfigStore,
    ctx: Context,
    _old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };

    // Cheap exit before any member lookup
    if !(new.self_mute && new.self_deaf && new.channel_id.is_some()) {
        return;
    }

    let is_bot = match &new.member {
        Some(member) => member.user.bot,
        None => match guild_id.member(&ctx, new.user_id).await {
            Ok(member) => member.user.bot,
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch member {} in guild {}: {:?}",
                    new.user_id,
                    guild_id,
                    e
                );
                return;
            }
        },
    };

    let snapshot = snapshot_from_voice_state(&new, is_bot);
    let service = ModerationService::new(store);

    let action = match service.evaluate(guild_id.get(), &snapshot).await {
        Ok(action) => action,
        Err(e) => {
            tracing::error!(
                "Failed to evaluate voice state for member {} in guild {}: {:?}",
                snapshot.member_id,
                guild_id,
                e
            );
            return;
        }
    };

    let actions = DiscordModerationActions::new(ctx.http.clone());
    ModerationService::execute(&actions, guild_id.get(), snapshot.member_id, &action).await;
}
