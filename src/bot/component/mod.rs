//! Message components: the settings menu, whitelist pagination and modals.
//!
//! Menus are stateless. Every button carries its action and the Unix time the menu was
//! rendered in its custom ID, and every click reloads settings from the store. A click on a
//! menu older than `MENU_TTL_SECONDS` disables its buttons instead of acting.

use chrono::Utc;
use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::response::{self, Respondable},
    data::ConfigStore,
    service::prompt::PromptService,
};

pub mod menu;
pub mod modal;
pub mod whitelist;

/// How long a posted menu accepts clicks.
pub const MENU_TTL_SECONDS: i64 = 60;

/// A button of the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    AddWhitelist,
    RemoveWhitelist,
    SetLogChannel,
    SetKickMessage,
    SetGreeting,
    ToggleJoinMessages,
    ToggleBot,
}

impl MenuButton {
    pub const ALL: [MenuButton; 7] = [
        Self::AddWhitelist,
        Self::RemoveWhitelist,
        Self::SetLogChannel,
        Self::SetKickMessage,
        Self::SetGreeting,
        Self::ToggleJoinMessages,
        Self::ToggleBot,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::AddWhitelist => "wl_add",
            Self::RemoveWhitelist => "wl_remove",
            Self::SetLogChannel => "log_channel",
            Self::SetKickMessage => "kick_message",
            Self::SetGreeting => "greeting",
            Self::ToggleJoinMessages => "toggle_join",
            Self::ToggleBot => "toggle_bot",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.key() == key)
    }
}

/// Decoded custom ID of a clickable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentId {
    /// Settings menu button.
    Menu { button: MenuButton, issued_at: i64 },
    /// Whitelist listing button that shows page `page` (zero-based).
    WhitelistPage { page: usize, issued_at: i64 },
}

impl ComponentId {
    pub fn encode(&self) -> String {
        match self {
            Self::Menu { button, issued_at } => format!("menu:{}:{}", button.key(), issued_at),
            Self::WhitelistPage { page, issued_at } => format!("wl_page:{}:{}", page, issued_at),
        }
    }

    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.split(':');
        let kind = parts.next()?;
        let value = parts.next()?;
        let issued_at = parts.next()?.parse::<i64>().ok()?;
        if parts.next().is_some() {
            return None;
        }

        match kind {
            "menu" => Some(Self::Menu {
                button: MenuButton::from_key(value)?,
                issued_at,
            }),
            "wl_page" => Some(Self::WhitelistPage {
                page: value.parse().ok()?,
                issued_at,
            }),
            _ => None,
        }
    }

    pub fn issued_at(&self) -> i64 {
        match self {
            Self::Menu { issued_at, .. } | Self::WhitelistPage { issued_at, .. } => *issued_at,
        }
    }

    /// Whether the menu this component belongs to no longer accepts clicks at `now`.
    pub fn is_expired(&self, now: i64) -> bool {
        now - self.issued_at() > MENU_TTL_SECONDS
    }
}

/// Current Unix time, stamped into freshly rendered menus.
pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Disables the buttons of an expired menu, leaving its embed as it was.
fn expired_response(id: ComponentId) -> CreateInteractionResponse {
    let rows = match id {
        ComponentId::Menu { issued_at, .. } => menu::menu_rows(issued_at, true),
        ComponentId::WhitelistPage { issued_at, .. } => {
            whitelist::page_rows(None, issued_at, true)
        }
    };

    CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new().components(rows),
    )
}

/// Handles a button click.
///
/// # Arguments
/// - `store` - Document store
/// - `prompts` - Pending reply prompts
/// - `ctx` - Discord context
/// - `interaction` - Component interaction to answer
pub async fn handle_component(
    store: &ConfigStore,
    prompts: &PromptService,
    ctx: &Context,
    interaction: &ComponentInteraction,
) {
    let respond = Respondable::Component(interaction);

    let Some(id) = ComponentId::parse(&interaction.data.custom_id) else {
        tracing::debug!(
            "Ignoring component with unknown custom id {}",
            interaction.data.custom_id
        );
        return;
    };

    let Some(guild_id) = interaction.guild_id else {
        respond.send(ctx, response::message(response::GUILD_ONLY, true)).await;
        return;
    };

    // Menus are posted publicly, so anyone can click them
    if !response::is_admin(interaction.member.as_ref()) {
        respond
            .send(ctx, response::message(response::MISSING_PERMISSIONS, true))
            .await;
        return;
    }

    if id.is_expired(now()) {
        respond.send(ctx, expired_response(id)).await;
        return;
    }

    match id {
        ComponentId::Menu { button, .. } => {
            menu::handle_menu_button(store, prompts, ctx, interaction, guild_id, button).await
        }
        ComponentId::WhitelistPage { page, .. } => {
            whitelist::handle_page_button(store, ctx, interaction, guild_id, page).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_ids_decode_to_what_was_encoded() {
        for button in MenuButton::ALL {
            let id = ComponentId::Menu {
                button,
                issued_at: 1_700_000_000,
            };
            assert_eq!(ComponentId::parse(&id.encode()), Some(id));
        }
    }

    #[test]
    fn page_id_format() {
        let id = ComponentId::WhitelistPage {
            page: 3,
            issued_at: 42,
        };

        assert_eq!(id.encode(), "wl_page:3:42");
        assert_eq!(ComponentId::parse("wl_page:3:42"), Some(id));
    }

    #[test]
    fn rejects_malformed_ids() {
        for custom_id in [
            "",
            "menu",
            "menu:toggle_bot",
            "menu:unknown:1",
            "menu:toggle_bot:soon",
            "wl_page:-1:1",
            "wl_page:1:1:1",
            "other:1:1",
        ] {
            assert_eq!(ComponentId::parse(custom_id), None, "{:?}", custom_id);
        }
    }

    /// Tests the expiry boundary.
    ///
    /// Expected: live up to and including 60 seconds, expired after
    #[test]
    fn expires_after_sixty_seconds() {
        let id = ComponentId::Menu {
            button: MenuButton::ToggleBot,
            issued_at: 1000,
        };

        assert!(!id.is_expired(1000));
        assert!(!id.is_expired(1060));
        assert!(id.is_expired(1061));
    }
}
