//! Bot commands understood in private chats

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "show how to use the bot")]
    Start,
    #[command(description = "explain the transliteration rules")]
    Help,
}
