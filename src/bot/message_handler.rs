//! Message Handler module for converting Telegram updates into bot events

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineQuery, InlineQueryResult, User};
use tracing::debug;

use super::commands::Command;
use super::events::{BotContext, BotEvent, Reaction};

fn language_code(user: Option<&User>) -> Option<String> {
    user.and_then(|user| user.language_code.clone())
}

/// Send a reaction to a chat. Inline answers are not valid here and are dropped.
async fn reply(bot: &Bot, chat_id: ChatId, reaction: Reaction) -> Result<()> {
    match reaction {
        Reaction::Reply(text) => {
            bot.send_message(chat_id, text).await?;
        }
        Reaction::Answer(_) | Reaction::Ignore => {}
    }
    Ok(())
}

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    command: Command,
    context: Arc<BotContext>,
) -> Result<()> {
    let event = BotEvent::Command {
        command,
        language_code: language_code(msg.from.as_ref()),
    };
    reply(&bot, msg.chat.id, context.handle(event)).await
}

pub async fn message_handler(bot: Bot, msg: Message, context: Arc<BotContext>) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    if !msg.chat.is_private() {
        debug!(chat_id = %msg.chat.id, "Ignoring message outside a private chat");
        return Ok(());
    }

    let event = BotEvent::DirectMessage {
        text: text.to_string(),
        language_code: language_code(msg.from.as_ref()),
    };
    reply(&bot, msg.chat.id, context.handle(event)).await
}

pub async fn inline_query_handler(
    bot: Bot,
    query: InlineQuery,
    context: Arc<BotContext>,
) -> Result<()> {
    let InlineQuery { id, from, query, .. } = query;

    let event = BotEvent::InlineQuery {
        query,
        requester: from.username,
        language_code: from.language_code,
    };

    let results: Vec<InlineQueryResult> = match context.handle(event) {
        Reaction::Answer(articles) => articles.into_iter().map(|a| a.into_result()).collect(),
        Reaction::Reply(_) | Reaction::Ignore => Vec::new(),
    };

    bot.answer_inline_query(id, results).await?;
    Ok(())
}
