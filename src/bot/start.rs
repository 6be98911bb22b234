use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::data::ConfigStore;
use crate::error::AppError;
use crate::service::prompt::PromptService;

/// Builds the Discord client without connecting it.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `store` - Document store shared with the event handler
/// - `prompts` - Pending reply prompts shared with the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    store: ConfigStore,
    prompts: PromptService,
) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(store, prompts);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to the gateway and processes events until shutdown.
///
/// # Arguments
/// - `client` - Client returned by `init_bot`
///
/// # Returns
/// - `Ok(())` - Bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - Gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
