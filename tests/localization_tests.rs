//! # Localization Tests
//!
//! This module contains unit tests for the localization functionality,
//! testing message retrieval, language resolution and formatting.

use ru_translit_bot::localization::{LocalizationManager, DEFAULT_LANGUAGE};
use std::collections::HashMap;

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &[
        "start-usage",
        "help-text",
        "unknown-command",
        "inline-to-cyrillic",
        "inline-to-latin",
        "translit-failed",
    ];

    fn setup_localization() -> LocalizationManager {
        LocalizationManager::new().expect("Failed to create localization manager")
    }

    #[test]
    fn test_get_message_existing_key() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("start-usage", "en", None);
        assert!(message.starts_with("Send me a message in russian translit."));
    }

    #[test]
    fn test_get_message_nonexistent_key() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("nonexistent-key", "en", None);
        assert!(message.starts_with("Missing translation:"));
    }

    #[test]
    fn test_get_message_unsupported_language() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("help-text", "unsupported", None);
        let english_message = manager.get_message_in_language("help-text", "en", None);
        assert_eq!(message, english_message);
    }

    #[test]
    fn test_get_message_with_args() {
        let manager = setup_localization();

        let mut args = HashMap::new();
        args.insert("reason", "Output too long");

        let message = manager.get_message_in_language("translit-failed", "en", Some(&args));
        assert_eq!(message, "Could not transliterate this text: Output too long");
    }

    #[test]
    fn test_get_message_missing_args() {
        let manager = setup_localization();

        // Missing arguments are rendered as placeholders rather than failing
        let message = manager.get_message_in_language("translit-failed", "en", None);
        assert!(message.starts_with("Could not transliterate this text:"));
    }

    #[test]
    fn test_message_reference() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("unknown-command", "en", None);
        let usage = manager.get_message_in_language("start-usage", "en", None);
        assert!(message.starts_with("Unknown command."));
        assert!(message.contains(&usage));
    }

    #[test]
    fn test_russian_localization() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("start-usage", "ru", None);
        assert!(message.contains("транслитом"));
        let english_message = manager.get_message_in_language("start-usage", "en", None);
        assert_ne!(message, english_message);
    }

    #[test]
    fn test_no_bidi_isolation_marks() {
        let manager = setup_localization();

        let message = manager.get_message_with_args("translit-failed", Some("ru"), &[("reason", "x")]);
        assert!(!message.contains('\u{2068}'));
        assert!(!message.contains('\u{2069}'));
        assert!(message.ends_with(": x"));
    }

    #[test]
    fn test_all_keys_translated() {
        let manager = setup_localization();

        for language in ["en", "ru"] {
            for key in KEYS {
                let message = manager.get_message_in_language(key, language, None);
                assert!(
                    !message.starts_with("Missing"),
                    "{key} is missing in {language}"
                );
            }
        }
    }

    #[test]
    fn test_resolve_language() {
        let manager = setup_localization();

        assert_eq!(manager.resolve_language(Some("ru")), "ru");
        assert_eq!(manager.resolve_language(Some("ru-RU")), "ru");
        assert_eq!(manager.resolve_language(Some("RU")), "ru");
        assert_eq!(manager.resolve_language(Some("en-GB")), "en");
        assert_eq!(manager.resolve_language(Some("de")), DEFAULT_LANGUAGE);
        assert_eq!(manager.resolve_language(Some("")), DEFAULT_LANGUAGE);
        assert_eq!(manager.resolve_language(None), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_get_message_by_language_code() {
        let manager = setup_localization();

        assert_eq!(
            manager.get_message("inline-to-latin", Some("ru-RU")),
            "Кириллица → латиница"
        );
        assert_eq!(
            manager.get_message("inline-to-latin", Some("fr")),
            "Cyrillic → Latin"
        );
    }
}
