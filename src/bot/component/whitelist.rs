//! Paginated whitelist listing.

use serenity::all::{
    ButtonStyle, ComponentInteraction, Context, CreateActionRow, CreateButton, CreateEmbed,
    CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage, GuildId, UserId,
};

use crate::{
    bot::{
        component::{now, ComponentId},
        response::{self, Respondable},
    },
    data::ConfigStore,
    error::AppError,
    model::whitelist::WhitelistPage,
    service::whitelist::WhitelistService,
};

const EMBED_COLOR: u32 = 0x00ff00;

/// One listing line for a whitelisted ID.
pub fn member_line(member_id: &str, display_name: Option<&str>) -> String {
    match display_name {
        Some(name) => format!("{} (ID: {})", name, member_id),
        None => format!("Unknown Member (ID: {})", member_id),
    }
}

/// Builds the embed for one page of the listing.
///
/// # Arguments
/// - `page` - Page being shown
/// - `lines` - One line per member on the page, in order
pub fn whitelist_embed(page: &WhitelistPage, lines: &[String]) -> CreateEmbed {
    let embed = CreateEmbed::new().title("Whitelist").color(EMBED_COLOR);

    if page.total == 0 {
        return embed.description("The whitelist is empty.");
    }

    embed
        .description(lines.join("\n"))
        .footer(CreateEmbedFooter::new(format!(
            "Page {} of {}",
            page.page + 1,
            page.total_pages
        )))
}

/// Builds the Previous/Next row.
///
/// Without a page (an expired listing) both buttons are rendered disabled.
pub fn page_rows(
    page: Option<&WhitelistPage>,
    issued_at: i64,
    disabled: bool,
) -> Vec<CreateActionRow> {
    let current = page.map_or(0, |p| p.page);
    let has_previous = page.is_some_and(WhitelistPage::has_previous);
    let has_next = page.is_some_and(WhitelistPage::has_next);

    let previous = CreateButton::new(
        ComponentId::WhitelistPage {
            page: current.saturating_sub(1),
            issued_at,
        }
        .encode(),
    )
    .label("Previous")
    .style(ButtonStyle::Secondary)
    .disabled(disabled || !has_previous);

    let next = CreateButton::new(
        ComponentId::WhitelistPage {
            page: current + 1,
            issued_at,
        }
        .encode(),
    )
    .label("Next")
    .style(ButtonStyle::Secondary)
    .disabled(disabled || !has_next);

    vec![CreateActionRow::Buttons(vec![previous, next])]
}

/// Loads a page of the whitelist and resolves member display names.
///
/// Members who have left the guild, or whose IDs are not valid snowflakes, are listed as
/// unknown.
pub async fn render_page(
    store: &ConfigStore,
    ctx: &Context,
    guild_id: GuildId,
    page: usize,
) -> Result<CreateInteractionResponseMessage, AppError> {
    let page = WhitelistService::new(store)
        .get_page(guild_id.get(), page)
        .await?;

    let mut lines = Vec::with_capacity(page.members.len());
    for member_id in &page.members {
        let name = match member_id.parse::<u64>().ok().filter(|id| *id != 0) {
            Some(id) => guild_id
                .member(ctx, UserId::new(id))
                .await
                .ok()
                .map(|member| member.display_name().to_string()),
            None => None,
        };
        lines.push(member_line(member_id, name.as_deref()));
    }

    let message = CreateInteractionResponseMessage::new().embed(whitelist_embed(&page, &lines));

    if page.total == 0 {
        return Ok(message);
    }

    Ok(message.components(page_rows(Some(&page), now(), false)))
}

/// Handles a Previous/Next click by re-rendering the listing in place.
pub async fn handle_page_button(
    store: &ConfigStore,
    ctx: &Context,
    interaction: &ComponentInteraction,
    guild_id: GuildId,
    page: usize,
) {
    let response = match render_page(store, ctx, guild_id, page).await {
        Ok(message) => CreateInteractionResponse::UpdateMessage(message),
        Err(e) => response::message(response::describe_error(&e, "render whitelist page"), true),
    };

    Respondable::Component(interaction).send(ctx, response).await;
}
