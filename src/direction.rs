//! # Direction Detection Module
//!
//! Decides which way a piece of text should be transliterated by looking at
//! how it encodes in UTF-8.

use std::fmt;

/// Target script for a transliteration request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptDirection {
    /// Latin input that should be rewritten in Cyrillic
    ToCyrillic,
    /// Input with non-Latin characters that should be rewritten in Latin
    ToLatin,
}

impl ScriptDirection {
    /// Classify `text` by comparing its UTF-8 byte length with its character count.
    ///
    /// Equal lengths mean every character is single-byte, so the text is plain
    /// Latin and goes to Cyrillic. A single multi-byte character anywhere in the
    /// text makes the whole text go to Latin, whatever the majority script is.
    ///
    /// The empty string classifies as [`ScriptDirection::ToCyrillic`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ru_translit_bot::direction::ScriptDirection;
    ///
    /// assert_eq!(ScriptDirection::detect("privet"), ScriptDirection::ToCyrillic);
    /// assert_eq!(ScriptDirection::detect("привет"), ScriptDirection::ToLatin);
    /// assert_eq!(ScriptDirection::detect(""), ScriptDirection::ToCyrillic);
    /// ```
    pub fn detect(text: &str) -> Self {
        if text.len() == text.chars().count() {
            ScriptDirection::ToCyrillic
        } else {
            ScriptDirection::ToLatin
        }
    }

    /// The opposite direction
    pub fn inverse(self) -> Self {
        match self {
            ScriptDirection::ToCyrillic => ScriptDirection::ToLatin,
            ScriptDirection::ToLatin => ScriptDirection::ToCyrillic,
        }
    }
}

impl fmt::Display for ScriptDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptDirection::ToCyrillic => write!(f, "to-cyrillic"),
            ScriptDirection::ToLatin => write!(f, "to-latin"),
        }
    }
}
