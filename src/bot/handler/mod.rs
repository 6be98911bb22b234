use serenity::all::{Context, EventHandler, Interaction, Member, Message, Ready, VoiceState};
use serenity::async_trait;

use crate::data::ConfigStore;
use crate::service::prompt::PromptService;

pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub store: ConfigStore,
    pub prompts: PromptService,
}

impl Handler {
    pub fn new(store: ConfigStore, prompts: PromptService) -> Self {
        Self { store, prompts }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a member joins, leaves, mutes or deafens in voice
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.store, ctx, old, new).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.store, ctx, new_member).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.store, &self.prompts, ctx, message).await;
    }

    /// Called for slash commands, button clicks and modal submissions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }
}
