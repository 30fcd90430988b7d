//! # Transliteration Error Types Module
//!
//! Errors reported by the transliteration adapter.

/// Custom error types for transliteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslitError {
    /// Transliterated text is longer than the configured limit (in characters)
    OutputTooLong { length: usize, limit: usize },
}

impl std::fmt::Display for TranslitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslitError::OutputTooLong { length, limit } => {
                write!(f, "Output too long: {length} characters (limit {limit})")
            }
        }
    }
}

impl std::error::Error for TranslitError {}
