//! Guild lookups used to validate admin input.

use serenity::all::{Channel, ChannelId, ChannelType, Context, GuildId, Member, UserId};

use crate::error::validation::ValidationError;

/// Resolves a guild member, from cache when available.
///
/// # Returns
/// - `Ok(Member)` - The user is a member of the guild
/// - `Err(ValidationError::MemberNotFound)` - Unknown user or not in this guild
pub async fn find_member(
    ctx: &Context,
    guild_id: GuildId,
    user_id: u64,
) -> Result<Member, ValidationError> {
    guild_id
        .member(ctx, UserId::new(user_id))
        .await
        .map_err(|e| {
            tracing::debug!("Member {} not found in guild {}: {:?}", user_id, guild_id, e);
            ValidationError::MemberNotFound(user_id)
        })
}

/// Checks that a channel is a text channel of the guild.
///
/// # Returns
/// - `Ok(u64)` - The channel ID
/// - `Err(ValidationError::NotATextChannel)` - Unknown channel, another guild's channel or
///   not a text channel
pub async fn require_text_channel(
    ctx: &Context,
    guild_id: GuildId,
    channel_id: u64,
) -> Result<u64, ValidationError> {
    match ChannelId::new(channel_id).to_channel(ctx).await {
        Ok(Channel::Guild(channel))
            if channel.guild_id == guild_id && channel.kind == ChannelType::Text =>
        {
            Ok(channel_id)
        }
        Ok(_) => Err(ValidationError::NotATextChannel(channel_id)),
        Err(e) => {
            tracing::debug!("Channel {} could not be fetched: {:?}", channel_id, e);
            Err(ValidationError::NotATextChannel(channel_id))
        }
    }
}
