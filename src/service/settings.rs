use crate::{
    data::{ConfigStore, SettingsRepository},
    error::AppError,
    model::{prompt::PromptField, settings::GuildSettings},
    util::parse::non_empty_text,
};

pub struct SettingsService<'a> {
    store: &'a ConfigStore,
}

impl<'a> SettingsService<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// Gets a guild's settings, creating the default document on first access
    pub async fn get(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        Ok(SettingsRepository::new(self.store).load(guild_id).await?)
    }

    /// Flips `bot_enabled` and returns the updated settings
    pub async fn toggle_bot(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        let settings = SettingsRepository::new(self.store)
            .update(guild_id, |settings| settings.bot_enabled = !settings.bot_enabled)
            .await?;

        tracing::info!(
            "Voice moderation {} in guild {}",
            if settings.bot_enabled { "enabled" } else { "disabled" },
            guild_id
        );

        Ok(settings)
    }

    /// Flips `join_messages` and returns the updated settings
    pub async fn toggle_join_messages(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        Ok(SettingsRepository::new(self.store)
            .update(guild_id, |settings| {
                settings.join_messages = !settings.join_messages
            })
            .await?)
    }

    /// Sets the channel that receives disconnect notices
    ///
    /// The caller is responsible for checking that the channel is a text channel of the guild.
    pub async fn set_log_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<GuildSettings, AppError> {
        Ok(SettingsRepository::new(self.store)
            .update(guild_id, |settings| settings.logs_channel = channel_id)
            .await?)
    }

    /// Sets the message sent to members after they are disconnected
    ///
    /// Rejects blank text; surrounding whitespace is trimmed.
    pub async fn set_kick_message(
        &self,
        guild_id: u64,
        message: &str,
    ) -> Result<GuildSettings, AppError> {
        self.set_text(guild_id, PromptField::KickMessage, message)
            .await
    }

    /// Sets the greeting sent to new members
    ///
    /// Rejects blank text; surrounding whitespace is trimmed.
    pub async fn set_dm_message(
        &self,
        guild_id: u64,
        message: &str,
    ) -> Result<GuildSettings, AppError> {
        self.set_text(guild_id, PromptField::Greeting, message).await
    }

    /// Writes free text to the field a reply prompt was collecting
    pub async fn set_text(
        &self,
        guild_id: u64,
        field: PromptField,
        message: &str,
    ) -> Result<GuildSettings, AppError> {
        let message = non_empty_text(message, field.label())?;

        Ok(SettingsRepository::new(self.store)
            .update(guild_id, move |settings| match field {
                PromptField::Greeting => settings.dm_message = message,
                PromptField::KickMessage => settings.kick_message = message,
            })
            .await?)
    }

    /// Greeting to DM a member who just joined, if any
    ///
    /// Returns `None` when moderation or join messages are switched off for the guild, or
    /// when the greeting is blank.
    pub async fn join_greeting(&self, guild_id: u64) -> Result<Option<String>, AppError> {
        let settings = self.get(guild_id).await?;

        if !settings.bot_enabled || !settings.join_messages {
            return Ok(None);
        }

        let greeting = settings.dm_message.trim();
        if greeting.is_empty() {
            return Ok(None);
        }

        Ok(Some(greeting.to_string()))
    }
}
