//! Word tokenization for overlap scoring.
//!
//! Both the ground truth and every prediction must pass through the same
//! tokenizer for the scorer to be meaningful, so the strategy is part of
//! [`EvalConfig`](crate::EvalConfig) and applied uniformly.
//!
//! Two strategies are supported:
//!
//! - [`TokenStrategy::Whitespace`]: lower-case, collapse whitespace runs,
//!   split on spaces. Punctuation stays attached to its word.
//! - [`TokenStrategy::WordChars`]: lower-case, extract maximal `\w+` runs.
//!   Stricter; drops punctuation-only tokens entirely.
//!
//! Tokenization is total: any string input, including the empty string,
//! yields a defined (possibly empty) token sequence.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Tokenization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenStrategy {
    /// Lower-case and split on collapsed whitespace.
    Whitespace,
    /// Lower-case and extract maximal word-character runs.
    WordChars,
}

impl TokenStrategy {
    /// Tokenize `text` into lower-case word tokens.
    ///
    /// Empty input yields an empty sequence. Never fails.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        match self {
            TokenStrategy::Whitespace => {
                lowered.split_whitespace().map(str::to_string).collect()
            }
            TokenStrategy::WordChars => WORD_RE
                .find_iter(&lowered)
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_lowercases_and_collapses() {
        let tokens = TokenStrategy::Whitespace.tokenize("The  Cat\n\tSat ");
        assert_eq!(tokens, vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_whitespace_keeps_punctuation_attached() {
        let tokens = TokenStrategy::Whitespace.tokenize("Hello, world!");
        assert_eq!(tokens, vec!["hello,", "world!"]);
    }

    #[test]
    fn test_word_chars_strips_punctuation() {
        let tokens = TokenStrategy::WordChars.tokenize("Hello, world! -- ok");
        assert_eq!(tokens, vec!["hello", "world", "ok"]);
    }

    #[test]
    fn test_word_chars_drops_punctuation_only_tokens() {
        let tokens = TokenStrategy::WordChars.tokenize("... --- !!!");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(TokenStrategy::Whitespace.tokenize("").is_empty());
        assert!(TokenStrategy::WordChars.tokenize("").is_empty());
        assert!(TokenStrategy::Whitespace.tokenize("   \n ").is_empty());
    }
}
