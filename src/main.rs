mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use crate::{config::Config, error::AppError, service::prompt::PromptService};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing()?;

    let config = Config::from_env()?;
    let store = startup::open_store(&config).await?;

    let prompts = PromptService::new();
    startup::spawn_prompt_sweeper(prompts.clone());

    let client = bot::start::init_bot(&config, store, prompts).await?;

    bot::start::start_bot(client).await
}
