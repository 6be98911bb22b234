//! Reply prompt service for collecting free-text settings from chat.
//!
//! This module provides the `PromptService` which tracks which admins have been asked to
//! type a settings value as their next message. Prompts are stored in memory keyed by
//! admin and guild, expire after 60 seconds, and are consumed by the first reply sent in the
//! channel the prompt was issued in.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::model::prompt::{AcceptedPrompt, PromptField};

/// Time-to-live for reply prompts in seconds.
pub const PROMPT_TTL_SECONDS: u64 = 60;

/// Pending prompt with expiration timestamp.
#[derive(Clone)]
struct PendingPrompt {
    /// Field the reply will be written to.
    field: PromptField,
    /// Channel the reply must be sent in.
    channel_id: u64,
    /// Timestamp when this prompt expires.
    expires_at: Instant,
}

impl PendingPrompt {
    fn new(field: PromptField, channel_id: u64, ttl: Duration) -> Self {
        Self {
            field,
            channel_id,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Service for managing pending reply prompts.
///
/// An admin has at most one pending prompt per guild; issuing a new one replaces the old.
/// Replies from other users or in other channels never match, and a prompt that expires
/// without a reply is discarded the next time it is looked at.
#[derive(Clone)]
pub struct PromptService {
    /// Pending prompts keyed by (user ID, guild ID).
    prompts: Arc<RwLock<HashMap<(u64, u64), PendingPrompt>>>,
    ttl: Duration,
}

impl PromptService {
    /// Creates a new PromptService with the default 60-second TTL.
    ///
    /// # Returns
    /// - `PromptService` - New service instance with no pending prompts
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(PROMPT_TTL_SECONDS))
    }

    /// Creates a new PromptService with a custom TTL.
    ///
    /// # Arguments
    /// - `ttl` - How long a prompt waits for its reply
    ///
    /// # Returns
    /// - `PromptService` - New service instance with no pending prompts
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            prompts: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Registers a prompt waiting for the admin's next message.
    ///
    /// Replaces any prompt the admin already has pending in this guild.
    ///
    /// # Arguments
    /// - `user_id` - Admin who was prompted
    /// - `guild_id` - Guild whose settings will be changed
    /// - `channel_id` - Channel the reply must be sent in
    /// - `field` - Settings field the reply will be written to
    pub async fn begin(&self, user_id: u64, guild_id: u64, channel_id: u64, field: PromptField) {
        let prompt = PendingPrompt::new(field, channel_id, self.ttl);
        self.prompts
            .write()
            .await
            .insert((user_id, guild_id), prompt);
    }

    /// Consumes the admin's pending prompt if a message answers it.
    ///
    /// A message answers a prompt when it is sent by the prompted admin, in the same guild
    /// and channel, before the prompt expires. Expired prompts are removed. Messages in
    /// other channels leave the prompt pending.
    ///
    /// # Arguments
    /// - `user_id` - Author of the message
    /// - `guild_id` - Guild the message was sent in
    /// - `channel_id` - Channel the message was sent in
    ///
    /// # Returns
    /// - `Some(AcceptedPrompt)` - The message answers a prompt, which has been consumed
    /// - `None` - No live prompt matches the message
    pub async fn take(&self, user_id: u64, guild_id: u64, channel_id: u64) -> Option<AcceptedPrompt> {
        let key = (user_id, guild_id);
        let mut prompts = self.prompts.write().await;

        let prompt = prompts.get(&key)?;

        if prompt.is_expired() {
            prompts.remove(&key);
            return None;
        }

        if prompt.channel_id != channel_id {
            return None;
        }

        prompts.remove(&key).map(|prompt| AcceptedPrompt {
            field: prompt.field,
            channel_id: prompt.channel_id,
        })
    }

    /// Whether the admin has a live prompt in this guild.
    ///
    /// Cheap read-only check so the message handler can ignore ordinary chat without taking
    /// the write lock.
    pub async fn is_pending(&self, user_id: u64, guild_id: u64) -> bool {
        self.prompts
            .read()
            .await
            .get(&(user_id, guild_id))
            .is_some_and(|prompt| !prompt.is_expired())
    }

    /// Drops every expired prompt.
    ///
    /// # Returns
    /// - `usize` - Number of prompts removed
    pub async fn purge_expired(&self) -> usize {
        let mut prompts = self.prompts.write().await;
        let before = prompts.len();
        prompts.retain(|_, prompt| !prompt.is_expired());
        before - prompts.len()
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
