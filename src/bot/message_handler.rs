//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

// Import conversation engine
use crate::advisor::Advisor;
use crate::conversation::{Healmate, Outbox, Reply};

// Import dialogue types
use crate::dialogue::HealthDialogue;

// Import UI builder functions
use super::ui_builder::keyboard_for;

/// Sends conversation replies to one Telegram chat
pub struct TelegramOutbox {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramOutbox {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl Outbox for TelegramOutbox {
    async fn send(&self, reply: Reply) -> Result<()> {
        match reply.markup {
            Some(markup) => {
                self.bot
                    .send_message(self.chat_id, reply.text)
                    .reply_markup(keyboard_for(&markup))
                    .await?;
            }
            None => {
                self.bot.send_message(self.chat_id, reply.text).await?;
            }
        }
        Ok(())
    }
}

pub async fn message_handler<A: Advisor + 'static>(
    bot: Bot,
    msg: Message,
    dialogue: HealthDialogue,
    app: Arc<Healmate<A>>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(user_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    // Records are keyed by the sender, falling back to the chat for anonymous posts
    let user_id = msg
        .from
        .as_ref()
        .map(|user| user.id.to_string())
        .unwrap_or_else(|| msg.chat.id.to_string());

    let state = dialogue.get().await?.unwrap_or_default();
    let outbox = TelegramOutbox::new(bot, msg.chat.id);

    let next = app.handle(&user_id, state, text, &outbox).await?;
    dialogue.update(next).await?;

    Ok(())
}
