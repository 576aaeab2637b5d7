//! Turns raw text into the lowercase word tokens stored in the vocabulary.
//!
//! The alphabet is ASCII letters. Anything else separates tokens.

pub fn tokenize(line: &str) -> Vec<String> {
    line.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
        .collect()
}

/// Like [`tokenize`], but an apostrophe inside a token is kept ("don't").
/// Apostrophes at either end of a token are dropped.
pub fn tokenize_keep_apostrophes(line: &str) -> Vec<String> {
    line.split(|c: char| !(c.is_ascii_alphabetic() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
        .collect()
}

/// Which of the two token rules to apply to raw text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tokenizer {
    /// [`tokenize`]: letters only, an apostrophe splits a word.
    Letters,
    /// [`tokenize_keep_apostrophes`]: "don't" stays one word.
    #[default]
    KeepApostrophes,
}

impl Tokenizer {
    pub fn tokenize(self, line: &str) -> Vec<String> {
        match self {
            Tokenizer::Letters => tokenize(line),
            Tokenizer::KeepApostrophes => tokenize_keep_apostrophes(line),
        }
    }
}
