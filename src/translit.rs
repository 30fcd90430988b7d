//! # Transliteration Module
//!
//! Converts text between Latin and Cyrillic script using the Russian mapping
//! table. Direction is either given explicitly or detected with
//! [`ScriptDirection::detect`].
//!
//! Latin parsing is longest-match first, so digraphs such as `zh` or `ja`
//! win over their single letters. This makes some round trips lossy: `сх`
//! becomes `sh`, which reads back as `ш`.

use crate::direction::ScriptDirection;
use crate::translit_errors::TranslitError;

/// Maximum length of a Telegram text message, in characters
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// A bidirectional Latin/Cyrillic mapping table
#[derive(Debug)]
pub struct MappingTable {
    /// Lowercase Cyrillic letters and their Latin spelling
    cyrillic_to_latin: &'static [(char, &'static str)],
    /// Lowercase Latin spellings, longest first, and their Cyrillic letter
    latin_to_cyrillic: &'static [(&'static str, char)],
}

static RUSSIAN: MappingTable = MappingTable {
    cyrillic_to_latin: &[
        ('а', "a"),
        ('б', "b"),
        ('в', "v"),
        ('г', "g"),
        ('д', "d"),
        ('е', "e"),
        ('ё', "jo"),
        ('ж', "zh"),
        ('з', "z"),
        ('и', "i"),
        ('й', "j"),
        ('к', "k"),
        ('л', "l"),
        ('м', "m"),
        ('н', "n"),
        ('о', "o"),
        ('п', "p"),
        ('р', "r"),
        ('с', "s"),
        ('т', "t"),
        ('у', "u"),
        ('ф', "f"),
        ('х', "h"),
        ('ц', "c"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "sz"),
        ('ъ', "#"),
        ('ы', "y"),
        ('ь', "'"),
        ('э', "eh"),
        ('ю', "ju"),
        ('я', "ja"),
    ],
    latin_to_cyrillic: &[
        ("zh", 'ж'),
        ("ch", 'ч'),
        ("sh", 'ш'),
        ("sz", 'щ'),
        ("eh", 'э'),
        ("jo", 'ё'),
        ("ju", 'ю'),
        ("ja", 'я'),
        // Input-only aliases
        ("yo", 'ё'),
        ("yu", 'ю'),
        ("ya", 'я'),
        ("a", 'а'),
        ("b", 'б'),
        ("v", 'в'),
        ("g", 'г'),
        ("d", 'д'),
        ("e", 'е'),
        ("z", 'з'),
        ("i", 'и'),
        ("j", 'й'),
        ("k", 'к'),
        ("l", 'л'),
        ("m", 'м'),
        ("n", 'н'),
        ("o", 'о'),
        ("p", 'п'),
        ("r", 'р'),
        ("s", 'с'),
        ("t", 'т'),
        ("u", 'у'),
        ("f", 'ф'),
        ("h", 'х'),
        ("c", 'ц'),
        ("y", 'ы'),
        ("#", 'ъ'),
        ("'", 'ь'),
    ],
};

impl MappingTable {
    fn latin_for(&self, cyrillic: char) -> Option<&'static str> {
        self.cyrillic_to_latin
            .iter()
            .find(|(c, _)| *c == cyrillic)
            .map(|(_, latin)| *latin)
    }

    /// Longest Latin spelling at the start of `rest`, with its length in chars
    fn match_latin(&self, rest: &[char]) -> Option<(usize, char)> {
        self.latin_to_cyrillic.iter().find_map(|(latin, cyrillic)| {
            let len = latin.len();
            let matches = rest.len() >= len
                && latin
                    .chars()
                    .zip(rest)
                    .all(|(l, r)| r.to_ascii_lowercase() == l);
            matches.then_some((len, *cyrillic))
        })
    }
}

/// Result of a detect-and-transliterate call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub direction: ScriptDirection,
    pub text: String,
}

/// Transliteration adapter configured with a language mapping table
#[derive(Debug, Clone, Copy)]
pub struct Transliterator {
    table: &'static MappingTable,
    output_limit: Option<usize>,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::russian()
    }
}

impl Transliterator {
    /// Transliterator using the Russian mapping table, without an output limit
    pub fn russian() -> Self {
        Self {
            table: &RUSSIAN,
            output_limit: None,
        }
    }

    /// Reject outputs longer than `limit` characters
    pub fn with_output_limit(mut self, limit: usize) -> Self {
        self.output_limit = Some(limit);
        self
    }

    /// Detect the direction of `text` and transliterate it
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ru_translit_bot::direction::ScriptDirection;
    /// use ru_translit_bot::translit::Transliterator;
    ///
    /// let translation = Transliterator::russian().translate("privet").unwrap();
    /// assert_eq!(translation.direction, ScriptDirection::ToCyrillic);
    /// assert_eq!(translation.text, "привет");
    /// ```
    pub fn translate(&self, text: &str) -> Result<Translation, TranslitError> {
        let direction = ScriptDirection::detect(text);
        let text = self.transliterate(text, direction)?;
        Ok(Translation { direction, text })
    }

    /// Transliterate `text` in the given direction
    ///
    /// # Errors
    ///
    /// [`TranslitError::OutputTooLong`] when an output limit is set and exceeded
    pub fn transliterate(
        &self,
        text: &str,
        direction: ScriptDirection,
    ) -> Result<String, TranslitError> {
        let output = match direction {
            ScriptDirection::ToCyrillic => self.to_cyrillic(text),
            ScriptDirection::ToLatin => self.to_latin(text),
        };

        if let Some(limit) = self.output_limit {
            let length = output.chars().count();
            if length > limit {
                return Err(TranslitError::OutputTooLong { length, limit });
            }
        }

        Ok(output)
    }

    fn to_cyrillic(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut output = String::with_capacity(text.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            match self.table.match_latin(&chars[i..]) {
                Some((consumed, cyrillic)) => {
                    if chars[i].is_uppercase() {
                        output.extend(cyrillic.to_uppercase());
                    } else {
                        output.push(cyrillic);
                    }
                    i += consumed;
                }
                None => {
                    output.push(chars[i]);
                    i += 1;
                }
            }
        }

        output
    }

    fn to_latin(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut output = String::with_capacity(text.len());

        for (i, &ch) in chars.iter().enumerate() {
            let lower = ch.to_lowercase().next().unwrap_or(ch);
            let Some(latin) = self.table.latin_for(lower) else {
                output.push(ch);
                continue;
            };

            if !ch.is_uppercase() {
                output.push_str(latin);
            } else if latin.len() == 1 || is_shouting(&chars, i) {
                output.push_str(&latin.to_ascii_uppercase());
            } else {
                let mut letters = latin.chars();
                if let Some(first) = letters.next() {
                    output.push(first.to_ascii_uppercase());
                    output.extend(letters);
                }
            }
        }

        output
    }
}

/// An uppercase letter inside an all-caps word spells its digraph in caps
fn is_shouting(chars: &[char], i: usize) -> bool {
    match chars.get(i + 1) {
        Some(next) if next.is_alphabetic() => next.is_uppercase(),
        _ => i > 0 && chars[i - 1].is_uppercase(),
    }
}
