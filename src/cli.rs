//! Command-line interface definitions.

use clap::Parser;
use std::num::IntErrorKind;
use tracing_subscriber::filter::LevelFilter;

/// Default verbosity level (Info)
pub const DEFAULT_VERBOSITY: i64 = 3;

/// Telegram inline bot transliterating between Latin and Cyrillic
#[derive(Parser)]
#[command(name = "ru-translit-bot")]
#[command(version)]
pub struct Cli {
    /// Telegram bot token to use
    #[arg(env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Verbosity level [0-4] (default: 3=INFO)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_VERBOSITY,
        value_parser = parse_level,
        allow_negative_numbers = true
    )]
    pub verbosity: i64,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Verbosity clamped into the supported range
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_level(self.verbosity)
    }
}

/// Parse a verbosity integer, saturating values outside the `i64` range
fn parse_level(value: &str) -> Result<i64, String> {
    match value.trim().parse::<i64>() {
        Ok(level) => Ok(level),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(format!("invalid integer: {e}")),
        },
    }
}

/// Log severity selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Critical,
    Error,
    Warning,
    #[default]
    Info,
    Debug,
}

impl Verbosity {
    /// Map an integer level to a verbosity, clamping it into [0, 4]
    pub fn from_level(level: i64) -> Self {
        match level.clamp(0, 4) {
            0 => Verbosity::Critical,
            1 => Verbosity::Error,
            2 => Verbosity::Warning,
            3 => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }

    /// Tracing filter for this verbosity.
    ///
    /// Nothing in the bot logs above error severity, so `Critical` silences
    /// all output.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Critical => LevelFilter::OFF,
            Verbosity::Error => LevelFilter::ERROR,
            Verbosity::Warning => LevelFilter::WARN,
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        }
    }
}
