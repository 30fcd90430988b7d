//! UI Builder module for creating inline query results

use teloxide::types::{
    InlineQueryResult, InlineQueryResultArticle, InputMessageContent, InputMessageContentText,
};

/// Telegram limit for inline result identifiers, in bytes
pub const MAX_RESULT_ID_BYTES: usize = 64;

/// A single inline query result, independent of the Telegram types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineArticle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub message_text: String,
}

impl InlineArticle {
    /// Article whose title and message body are the transliterated text
    pub fn for_translation(text: &str, description: String) -> Self {
        Self {
            id: result_id(text),
            title: text.to_string(),
            description,
            message_text: text.to_string(),
        }
    }

    /// Convert into the teloxide result type
    pub fn into_result(self) -> InlineQueryResult {
        let content = InputMessageContent::Text(InputMessageContentText::new(self.message_text));
        InlineQueryResult::Article(
            InlineQueryResultArticle::new(self.id, self.title, content)
                .description(self.description),
        )
    }
}

/// Result id derived from the text, cut to the id limit on a character boundary
pub fn result_id(text: &str) -> String {
    if text.len() <= MAX_RESULT_ID_BYTES {
        return text.to_string();
    }

    let mut end = MAX_RESULT_ID_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_is_unchanged() {
        assert_eq!(result_id("привет"), "привет");
    }

    #[test]
    fn test_long_id_is_cut_on_char_boundary() {
        // 40 two-byte characters, 80 bytes
        let text = "ж".repeat(40);
        let id = result_id(&text);
        assert_eq!(id.len(), MAX_RESULT_ID_BYTES);
        assert_eq!(id, "ж".repeat(32));

        // Odd boundary: 1 ASCII byte then two-byte characters
        let text = format!("a{}", "ж".repeat(40));
        let id = result_id(&text);
        assert_eq!(id.len(), 63);
        assert!(text.starts_with(&id));
    }

    #[test]
    fn test_into_result_is_article() {
        let article = InlineArticle::for_translation("привет", "Latin → Cyrillic".to_string());
        match article.into_result() {
            InlineQueryResult::Article(article) => {
                assert_eq!(article.title, "привет");
                assert_eq!(article.description.as_deref(), Some("Latin → Cyrillic"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
