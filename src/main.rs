use anyhow::Result;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use healmate::advisor::GroqAdvisor;
use healmate::bot;
use healmate::config::BotConfig;
use healmate::conversation::Healmate;
use healmate::dialogue::ChatState;
use healmate::store::UserStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Healmate Telegram Bot");

    let config = BotConfig::from_env()?;
    if config.advisor.api_key.is_none() {
        warn!("GROQ_API_KEY is not set, /aiadvice requests will fail");
    }

    info!(data_dir = %config.data_dir.display(), model = %config.advisor.model, "Configuration loaded");

    let store = UserStore::new(config.data_dir.clone());
    let app = Arc::new(Healmate::new(store, GroqAdvisor::new(config.advisor.clone())));

    // Initialize the bot
    let bot = Bot::new(config.telegram_token.clone());

    if let Err(e) = bot::register_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    info!("Bot initialized, starting dispatcher");

    let handler = Update::filter_message()
        .enter_dialogue::<Message, InMemStorage<ChatState>, ChatState>()
        .endpoint(bot::message_handler::<GroqAdvisor>);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<ChatState>::new(), app])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
