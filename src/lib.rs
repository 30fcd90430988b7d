//! # Russian Translit Telegram Bot
//!
//! A Telegram bot that transliterates text between Latin and Cyrillic script
//! using Russian mapping rules, through inline queries or private messages.

pub mod bot;
pub mod cli;
pub mod direction;
pub mod localization;
pub mod telemetry;
pub mod translit;
pub mod translit_errors;
