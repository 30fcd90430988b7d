use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;

use ru_translit_bot::bot::{self, BotContext};
use ru_translit_bot::cli::Cli;
use ru_translit_bot::telemetry::LogSettings;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    LogSettings {
        verbosity: cli.verbosity(),
        json: cli.log_json,
    }
    .init()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting transliteration bot"
    );

    let context = Arc::new(BotContext::new()?);
    let bot = Bot::new(cli.token);

    bot::run(bot, context).await
}
