//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `events`: the event type, the reactions and the dispatch over them
//! - `message_handler`: converts teloxide updates into events and performs reactions
//! - `error_handler`: routes transport errors into the dispatch
//! - `ui_builder`: creates inline query results
//! - `commands`: the bot command list

pub mod commands;
pub mod error_handler;
pub mod events;
pub mod message_handler;
pub mod ui_builder;

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

pub use commands::Command;
pub use error_handler::TransportErrorHandler;
pub use events::{BotContext, BotEvent, Reaction};
pub use ui_builder::InlineArticle;

/// Register bot commands with Telegram so they appear in the "/" menu
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}

/// Poll Telegram for updates until interrupted with ctrl-c
pub async fn run(bot: Bot, context: Arc<BotContext>) -> Result<()> {
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(message_handler::command_handler),
        )
        .branch(Update::filter_message().endpoint(message_handler::message_handler))
        .branch(Update::filter_inline_query().endpoint(message_handler::inline_query_handler));

    let listener = update_listeners::polling_default(bot.clone()).await;

    info!("Bot initialized, starting dispatcher");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::clone(&context)])
        .error_handler(TransportErrorHandler::new(Arc::clone(&context)))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(listener, TransportErrorHandler::new(context))
        .await;

    info!("Dispatcher stopped");
    Ok(())
}
