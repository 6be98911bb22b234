use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, GuildId, ResolvedValue, User,
};

use crate::{
    bot::{component::whitelist, response},
    data::ConfigStore,
    error::{validation::ValidationError, AppError},
    service::whitelist::WhitelistService,
};

fn member_option(command: &CommandInteraction) -> Result<&User, ValidationError> {
    command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::User(user, _) if option.name == "member" => Some(user),
            _ => None,
        })
        .ok_or_else(|| ValidationError::InvalidUserId(String::new()))
}

/// `/whitelist_add <member>`
pub async fn whitelist_add(
    store: &ConfigStore,
    guild_id: GuildId,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponse, AppError> {
    let user = member_option(command)?;

    let content = if WhitelistService::new(store)
        .add(guild_id.get(), user.id.get())
        .await?
    {
        format!("{} has been added to the whitelist.", user.name)
    } else {
        format!("{} is already in the whitelist.", user.name)
    };

    Ok(response::message(content, false))
}

/// `/whitelist_remove <member>`
pub async fn whitelist_remove(
    store: &ConfigStore,
    guild_id: GuildId,
    command: &CommandInteraction,
) -> Result<CreateInteractionResponse, AppError> {
    let user = member_option(command)?;

    let content = if WhitelistService::new(store)
        .remove(guild_id.get(), user.id.get())
        .await?
    {
        format!("{} has been removed from the whitelist.", user.name)
    } else {
        format!("{} is not in the whitelist.", user.name)
    };

    Ok(response::message(content, false))
}

/// `/list_whitelist`: first page of the paginated listing
pub async fn list_whitelist(
    store: &ConfigStore,
    ctx: &Context,
    guild_id: GuildId,
) -> Result<CreateInteractionResponse, AppError> {
    let message = whitelist::render_page(store, ctx, guild_id, 0).await?;

    Ok(CreateInteractionResponse::Message(message))
}
