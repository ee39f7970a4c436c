use crate::constants::{PUNCTUATION_CHARS, STOP_WORDS};
use crate::types::TokenSet;
use crate::utils::abbreviate_state_names;

#[derive(Copy, Clone)]
pub struct Tokenizer {
    pub abbreviate_state_names: bool,
    pub filter_stop_words: bool,
}

impl Tokenizer {
    /// Configuration for dataset field values (school name, city, state).
    pub fn field_parser() -> Self {
        Self {
            abbreviate_state_names: false,
            filter_stop_words: true,
        }
    }

    /// Configuration for free-text queries. Queries additionally get
    /// state-name normalization, since users type full state names while the
    /// dataset stores USPS abbreviations.
    pub fn query_parser() -> Self {
        Self {
            abbreviate_state_names: true,
            filter_stop_words: true,
        }
    }

    /// Normalizes text into its distinct word tokens.
    ///
    /// Punctuation is space-replaced before any other character stripping, so
    /// "LINCOLN-DOUGLAS" splits into two tokens rather than merging into one.
    /// Always succeeds; degenerate input yields an empty set.
    pub fn tokenize(self, text: &str) -> TokenSet {
        let lowered = text.to_lowercase();

        let normalized = if self.abbreviate_state_names {
            abbreviate_state_names(&lowered)
        } else {
            lowered
        };

        normalized
            .replace(PUNCTUATION_CHARS, " ")
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect::<String>()
            .split_whitespace()
            .filter(|word| !self.filter_stop_words || !STOP_WORDS.contains(word))
            .map(str::to_string)
            .collect()
    }
}
