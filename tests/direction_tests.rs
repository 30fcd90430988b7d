//! # Direction Detection Tests
//!
//! Tests for classifying input text by its UTF-8 encoding.

use ru_translit_bot::direction::ScriptDirection;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_goes_to_cyrillic() {
        for text in ["privet", "Hello, World!", "123 !@# $%^", "s'el ob#jom", " \n\t"] {
            assert_eq!(
                ScriptDirection::detect(text),
                ScriptDirection::ToCyrillic,
                "{text:?} should go to Cyrillic"
            );
        }
    }

    #[test]
    fn test_empty_string_goes_to_cyrillic() {
        assert_eq!(ScriptDirection::detect(""), ScriptDirection::ToCyrillic);
    }

    #[test]
    fn test_cyrillic_goes_to_latin() {
        assert_eq!(ScriptDirection::detect("привет"), ScriptDirection::ToLatin);
        assert_eq!(ScriptDirection::detect("Ё"), ScriptDirection::ToLatin);
    }

    /// A single multi-byte character flips the whole text, whatever the majority script
    #[test]
    fn test_any_multibyte_character_goes_to_latin() {
        assert_eq!(
            ScriptDirection::detect("this is mostly latin text, да"),
            ScriptDirection::ToLatin
        );
        assert_eq!(ScriptDirection::detect("café"), ScriptDirection::ToLatin);
        assert_eq!(ScriptDirection::detect("hello 👋"), ScriptDirection::ToLatin);
        assert_eq!(ScriptDirection::detect("a\u{00A0}b"), ScriptDirection::ToLatin);
    }
}
