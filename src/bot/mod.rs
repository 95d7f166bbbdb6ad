//! Bot module for handling Telegram interactions
//!
//! - `message_handler`: routes incoming messages into the conversation engine
//! - `ui_builder`: creates reply keyboards

pub mod message_handler;
pub mod ui_builder;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::BotCommand;

use crate::localization::t;

// Re-export main handler function for use in main.rs
pub use message_handler::{message_handler, TelegramOutbox};

/// Commands shown in the Telegram command menu
pub fn bot_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", t("command-start")),
        BotCommand::new("aiadvice", t("command-aiadvice")),
        BotCommand::new("cancel", t("command-cancel")),
        BotCommand::new("help", t("command-help")),
    ]
}

/// Publish the command menu to Telegram
pub async fn register_commands(bot: &Bot) -> Result<()> {
    bot.set_my_commands(bot_commands()).await?;
    Ok(())
}
