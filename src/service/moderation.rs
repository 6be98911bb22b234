//! Voice moderation: the disconnect decision and the platform actions that carry it out.
//!
//! `ModerationPolicy::decide` is a pure function of a voice-state snapshot and the guild's
//! settings and whitelist. `ModerationService` loads those documents for a guild, evaluates
//! the policy and, for a disconnect, drives the three platform actions through the
//! `ModerationActions` trait. Each action is attempted independently; a failure is logged and
//! never prevents the remaining actions.

use serenity::all::{ChannelId, CreateMessage, GuildId, UserId};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    data::{ConfigStore, SettingsRepository, WhitelistRepository},
    error::AppError,
    model::{
        moderation::{Action, VoiceStateSnapshot},
        settings::GuildSettings,
        whitelist::Whitelist,
    },
};

/// Pure moderation decision.
pub struct ModerationPolicy;

impl ModerationPolicy {
    /// Decides what to do with a member after a voice-state update.
    ///
    /// Returns `NoAction` when any of these hold, checked in order: the member is a bot,
    /// moderation is disabled for the guild, the member is not both self-muted and
    /// self-deafened, the member is not in a voice channel, the member is whitelisted.
    /// Otherwise returns `Disconnect` with the guild's kick message (default text when blank)
    /// and log channel (none when unset or stored as `0`).
    ///
    /// # Arguments
    /// - `state` - Member's voice state after the update
    /// - `settings` - Guild settings
    /// - `whitelist` - Guild whitelist
    ///
    /// # Returns
    /// - `Action` - Decision; identical inputs always yield an identical decision
    pub fn decide(
        state: &VoiceStateSnapshot,
        settings: &GuildSettings,
        whitelist: &Whitelist,
    ) -> Action {
        if state.is_bot || !settings.bot_enabled {
            return Action::NoAction;
        }

        if !(state.self_mute && state.self_deaf) || !state.in_voice_channel {
            return Action::NoAction;
        }

        if whitelist.contains_id(state.member_id) {
            return Action::NoAction;
        }

        Action::Disconnect {
            kick_message: settings.effective_kick_message().to_string(),
            log_channel: settings.log_channel(),
        }
    }

    /// Checks the conditions that need no guild documents.
    ///
    /// Lets callers skip reading settings and whitelist for the common case of an update
    /// that can never lead to a disconnect.
    fn is_candidate(state: &VoiceStateSnapshot) -> bool {
        !state.is_bot && state.self_mute && state.self_deaf && state.in_voice_channel
    }
}

/// Platform operations needed to carry out a disconnect.
///
/// Each call is one-shot; implementations must not retry.
#[async_trait]
pub trait ModerationActions: Send + Sync {
    /// Moves the member out of voice.
    async fn disconnect(&self, guild_id: u64, member_id: u64) -> Result<(), AppError>;

    /// Posts a message in a guild text channel.
    async fn post_log(&self, channel_id: u64, content: String) -> Result<(), AppError>;

    /// Sends a direct message to the member.
    async fn send_direct_message(&self, member_id: u64, content: String) -> Result<(), AppError>;
}

/// `ModerationActions` backed by the Discord HTTP API.
pub struct DiscordModerationActions {
    http: Arc<Http>,
}

impl DiscordModerationActions {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ModerationActions for DiscordModerationActions {
    async fn disconnect(&self, guild_id: u64, member_id: u64) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .disconnect_member(&self.http, UserId::new(member_id))
            .await?;
        Ok(())
    }

    async fn post_log(&self, channel_id: u64, content: String) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;
        Ok(())
    }

    async fn send_direct_message(&self, member_id: u64, content: String) -> Result<(), AppError> {
        UserId::new(member_id)
            .direct_message(&self.http, CreateMessage::new().content(content))
            .await?;
        Ok(())
    }
}

/// Which platform actions succeeded for a disconnect.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModerationOutcome {
    pub disconnected: bool,
    /// `None` when the guild has no log channel configured.
    pub logged: Option<bool>,
    pub notified: bool,
}

pub struct ModerationService<'a> {
    store: &'a ConfigStore,
}

impl<'a> ModerationService<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// Evaluates a voice-state update for a guild.
    ///
    /// Reads the guild's settings and, only when the member would otherwise be disconnected,
    /// its whitelist, then applies `ModerationPolicy::decide`. Updates that cannot lead to a
    /// disconnect are answered without touching storage.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the update happened in
    /// - `state` - Member's voice state after the update
    ///
    /// # Returns
    /// - `Ok(Action)` - Decision for this update
    /// - `Err(AppError::StoreErr)` - Guild documents could not be read
    pub async fn evaluate(
        &self,
        guild_id: u64,
        state: &VoiceStateSnapshot,
    ) -> Result<Action, AppError> {
        if !ModerationPolicy::is_candidate(state) {
            return Ok(Action::NoAction);
        }

        let settings = SettingsRepository::new(self.store).load(guild_id).await?;
        if !settings.bot_enabled {
            return Ok(Action::NoAction);
        }

        let whitelist = WhitelistRepository::new(self.store).load(guild_id).await?;

        Ok(ModerationPolicy::decide(state, &settings, &whitelist))
    }

    /// Carries out a decision.
    ///
    /// For `Disconnect`, disconnects the member, posts a notice to the log channel when one
    /// is configured, then DMs the kick message. Every failure is logged and swallowed so the
    /// remaining actions still run.
    ///
    /// # Arguments
    /// - `actions` - Platform operations to use
    /// - `guild_id` - Guild the member is in
    /// - `member_id` - Member to act on
    /// - `action` - Decision returned by `evaluate`
    ///
    /// # Returns
    /// - `ModerationOutcome` - Which actions succeeded; all false for `NoAction`
    pub async fn execute<A: ModerationActions + ?Sized>(
        actions: &A,
        guild_id: u64,
        member_id: u64,
        action: &Action,
    ) -> ModerationOutcome {
        let Action::Disconnect {
            kick_message,
            log_channel,
        } = action
        else {
            return ModerationOutcome::default();
        };

        let mut outcome = ModerationOutcome::default();

        match actions.disconnect(guild_id, member_id).await {
            Ok(()) => {
                outcome.disconnected = true;
                tracing::info!(
                    "Disconnected member {} from voice in guild {}",
                    member_id,
                    guild_id
                );
            }
            Err(e) => tracing::warn!(
                "Failed to disconnect member {} in guild {}: {}",
                member_id,
                guild_id,
                e
            ),
        }

        if let Some(channel_id) = log_channel {
            let content = format!("<@{}> was disconnected.", member_id);
            match actions.post_log(*channel_id, content).await {
                Ok(()) => outcome.logged = Some(true),
                Err(e) => {
                    outcome.logged = Some(false);
                    tracing::warn!(
                        "Failed to post disconnect log to channel {} in guild {}: {}",
                        channel_id,
                        guild_id,
                        e
                    );
                }
            }
        }

        match actions
            .send_direct_message(member_id, kick_message.clone())
            .await
        {
            Ok(()) => outcome.notified = true,
            Err(e) => tracing::warn!(
                "Failed to send kick message to member {}: {}",
                member_id,
                e
            ),
        }

        outcome
    }
}
