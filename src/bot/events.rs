//! Event dispatch for the bot
//!
//! Every inbound Telegram interaction is converted into a [`BotEvent`] and
//! handled by [`BotContext::handle`], which returns the [`Reaction`] the
//! Telegram layer should perform. Nothing here touches the network, so the
//! whole dispatch table can be exercised directly in tests.

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::direction::ScriptDirection;
use crate::localization::LocalizationManager;
use crate::translit::{Transliterator, TELEGRAM_MESSAGE_LIMIT};

use super::commands::Command;
use super::ui_builder::InlineArticle;

/// Inbound events the bot reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotEvent {
    /// A `/start` or `/help` command
    Command {
        command: Command,
        language_code: Option<String>,
    },
    /// An inline query typed in any chat
    InlineQuery {
        query: String,
        requester: Option<String>,
        language_code: Option<String>,
    },
    /// Plain text sent to the bot in a private chat
    DirectMessage {
        text: String,
        language_code: Option<String>,
    },
    /// An error reported by the Telegram transport or a handler
    TransportError { description: String },
}

/// What the Telegram layer should do in response to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// Send a plain text message to the originating chat
    Reply(String),
    /// Answer the inline query with these results
    Answer(Vec<InlineArticle>),
    /// Nothing to send
    Ignore,
}

/// Shared, immutable state handed to every handler
pub struct BotContext {
    pub localization: LocalizationManager,
    pub transliterator: Transliterator,
}

impl BotContext {
    /// Context with bundled translations and the Russian mapping table,
    /// limited to what fits in one Telegram message
    pub fn new() -> Result<Self> {
        Ok(Self {
            localization: LocalizationManager::new()?,
            transliterator: Transliterator::russian().with_output_limit(TELEGRAM_MESSAGE_LIMIT),
        })
    }

    /// Dispatch an event to its handler
    pub fn handle(&self, event: BotEvent) -> Reaction {
        match event {
            BotEvent::Command {
                command,
                language_code,
            } => self.on_command(command, language_code.as_deref()),
            BotEvent::InlineQuery {
                query,
                requester,
                language_code,
            } => self.on_inline_query(&query, requester.as_deref(), language_code.as_deref()),
            BotEvent::DirectMessage {
                text,
                language_code,
            } => self.on_direct_message(&text, language_code.as_deref()),
            BotEvent::TransportError { description } => {
                error!(error = %description, "Got Telegram error");
                Reaction::Ignore
            }
        }
    }

    fn on_command(&self, command: Command, language_code: Option<&str>) -> Reaction {
        debug!(?command, "Command received");
        let key = match command {
            Command::Start => "start-usage",
            Command::Help => "help-text",
        };
        Reaction::Reply(self.localization.get_message(key, language_code))
    }

    fn on_inline_query(
        &self,
        query: &str,
        requester: Option<&str>,
        language_code: Option<&str>,
    ) -> Reaction {
        info!(
            query,
            from = requester.unwrap_or("<unknown>"),
            "Inline query received"
        );

        if query.is_empty() {
            return Reaction::Answer(Vec::new());
        }

        match self.transliterator.translate(query) {
            Ok(translation) => {
                let description = self.direction_label(translation.direction, language_code);
                Reaction::Answer(vec![InlineArticle::for_translation(
                    &translation.text,
                    description,
                )])
            }
            Err(e) => {
                warn!(error = %e, "Inline query could not be transliterated");
                Reaction::Answer(Vec::new())
            }
        }
    }

    fn on_direct_message(&self, text: &str, language_code: Option<&str>) -> Reaction {
        if text.starts_with('/') {
            return Reaction::Reply(self.localization.get_message("unknown-command", language_code));
        }

        match self.transliterator.translate(text) {
            Ok(translation) => {
                debug!(direction = %translation.direction, "Direct message transliterated");
                Reaction::Reply(translation.text)
            }
            Err(e) => {
                warn!(error = %e, "Direct message could not be transliterated");
                Reaction::Reply(self.localization.get_message_with_args(
                    "translit-failed",
                    language_code,
                    &[("reason", &e.to_string())],
                ))
            }
        }
    }

    fn direction_label(&self, direction: ScriptDirection, language_code: Option<&str>) -> String {
        let key = match direction {
            ScriptDirection::ToCyrillic => "inline-to-cyrillic",
            ScriptDirection::ToLatin => "inline-to-latin",
        };
        self.localization.get_message(key, language_code)
    }
}
