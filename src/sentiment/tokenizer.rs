//! # Tokenizer
//!
//! Splits record text into words and emoticons for the lexicon scorers.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Emoticons first so `:)` is not lost to punctuation stripping
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:<3|[:;=][\-o\*']?[\)\]\(\[dDpP|]|[\p{L}\p{N}]+(?:'\p{L}+)*)")
        .expect("token pattern is valid")
});

/// Kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Emoticon,
}

/// A token of record text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text as written
    pub original: String,
    /// Lowercased form used for lexicon lookups
    pub normalized: String,
    /// Word or emoticon
    pub kind: TokenKind,
}

impl Token {
    /// Check if the token is an all-caps word such as "GREAT"
    pub fn is_shouted(&self) -> bool {
        self.kind == TokenKind::Word
            && self.original.chars().filter(|c| c.is_alphabetic()).count() > 1
            && self
                .original
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(|c| c.is_uppercase())
    }

    /// Check for contracted negations like "isn't" or "don't"
    pub fn is_contracted_negation(&self) -> bool {
        self.normalized.ends_with("n't")
    }
}

/// Word and emoticon tokenizer
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text, dropping punctuation that is not part of an emoticon
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized: String = text.nfc().collect::<String>().replace('\u{2019}', "'");

        TOKEN_REGEX
            .find_iter(&normalized)
            .map(|m| {
                let original = m.as_str();
                let kind = if is_emoticon(original) {
                    TokenKind::Emoticon
                } else {
                    TokenKind::Word
                };
                Token {
                    original: original.to_string(),
                    normalized: normalize_token(original),
                    kind,
                }
            })
            .collect()
    }
}

fn is_emoticon(token: &str) -> bool {
    token == "<3" || token.starts_with([':', ';', '='])
}

/// Lookup key of a token: words lowercased, emoticons verbatim
pub fn normalize_token(token: &str) -> String {
    if is_emoticon(token) {
        token.to_string()
    } else {
        token.to_lowercase()
    }
}

/// Count `!` and `?` marks in the raw text
pub fn punctuation_counts(text: &str) -> (usize, usize) {
    text.chars().fold((0, 0), |(bang, question), c| match c {
        '!' => (bang + 1, question),
        '?' => (bang, question + 1),
        _ => (bang, question),
    })
}

/// Check if text mixes upper and lower case letters
pub fn has_mixed_case(text: &str) -> bool {
    let mut upper = false;
    let mut lower = false;
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        upper |= c.is_uppercase();
        lower |= c.is_lowercase();
    }
    upper && lower
}
