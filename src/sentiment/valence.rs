//! # Valence Lexicon
//!
//! Word valences on a -4..+4 scale plus the booster and negation word lists
//! used by the [`CompoundClassifier`](super::CompoundClassifier).

use super::tokenizer::{normalize_token, Token};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use thiserror::Error;

/// Valence added by an intensifying booster
pub const BOOSTER_INCREMENT: f64 = 0.293;

/// Valence added by a dampening booster
pub const BOOSTER_DECREMENT: f64 = -0.293;

/// Errors raised while extending a lexicon from an external file
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),

    #[error("lexicon format error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid valence `{value}` for `{word}` on line {line}")]
    InvalidValence {
        line: u64,
        word: String,
        value: String,
    },
}

/// Rule-based valence lexicon
#[derive(Debug, Clone)]
pub struct ValenceLexicon {
    /// Token to valence mapping
    valences: HashMap<String, f64>,
    /// Booster word to scalar mapping
    boosters: HashMap<String, f64>,
    /// Negation words
    negations: HashSet<String>,
}

impl Default for ValenceLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ValenceLexicon {
    /// Build the lexicon shipped with the crate
    pub fn builtin() -> Self {
        let valences = vec![
            // Positive
            ("love", 3.2),
            ("loved", 2.9),
            ("lovely", 2.8),
            ("like", 1.5),
            ("liked", 1.8),
            ("good", 1.9),
            ("great", 3.1),
            ("nice", 1.8),
            ("excellent", 2.7),
            ("amazing", 2.8),
            ("awesome", 3.1),
            ("wonderful", 2.7),
            ("fantastic", 2.6),
            ("perfect", 2.7),
            ("best", 3.2),
            ("better", 1.9),
            ("beautiful", 2.9),
            ("happy", 2.7),
            ("glad", 2.0),
            ("pleased", 1.9),
            ("excited", 1.4),
            ("fun", 2.3),
            ("cool", 1.3),
            ("helpful", 1.8),
            ("friendly", 2.2),
            ("easy", 1.9),
            ("free", 2.3),
            ("interesting", 1.7),
            ("impressive", 2.3),
            ("brilliant", 2.8),
            ("enjoy", 2.2),
            ("enjoyed", 2.3),
            ("smooth", 1.2),
            ("reliable", 1.2),
            ("okay", 0.9),
            ("ok", 1.2),
            ("fine", 0.8),
            ("special", 1.2),
            ("sure", 1.3),
            ("thanks", 1.9),
            ("thank", 1.5),
            ("grateful", 2.0),
            ("win", 2.8),
            ("yes", 1.7),
            ("lol", 1.8),
            // Negative
            ("bad", -2.5),
            ("worse", -2.1),
            ("worst", -3.1),
            ("terrible", -2.1),
            ("awful", -2.0),
            ("horrible", -2.5),
            ("hate", -2.7),
            ("hated", -3.2),
            ("sad", -2.1),
            ("unhappy", -1.8),
            ("angry", -2.3),
            ("upset", -1.6),
            ("annoying", -1.7),
            ("annoyed", -1.6),
            ("frustrating", -1.9),
            ("frustrated", -1.7),
            ("disappointing", -2.2),
            ("disappointed", -1.9),
            ("delay", -1.3),
            ("delayed", -1.1),
            ("late", -0.8),
            ("slow", -1.1),
            ("poor", -2.1),
            ("broken", -1.4),
            ("wrong", -2.1),
            ("boring", -1.3),
            ("ugly", -2.3),
            ("difficult", -1.5),
            ("confusing", -1.3),
            ("useless", -1.8),
            ("rude", -2.0),
            ("expensive", -1.1),
            ("worried", -1.2),
            ("stupid", -2.4),
            ("sorry", -0.3),
            ("lost", -1.3),
            ("cancelled", -1.0),
            ("problem", -1.7),
            ("fail", -2.5),
            ("failed", -2.3),
            ("crash", -1.7),
            // Emoticons
            (":)", 2.0),
            (":-)", 1.3),
            (";)", 0.9),
            ("=)", 1.6),
            (":D", 2.3),
            ("<3", 1.9),
            (":(", -1.9),
            (":-(", -1.5),
            ("=(", -1.6),
            (":|", -0.4),
        ]
        .into_iter()
        .map(|(word, valence)| (word.to_string(), valence))
        .collect();

        let increments = vec![
            "absolutely", "amazingly", "awfully", "completely", "considerably",
            "deeply", "enormously", "entirely", "especially", "exceptionally",
            "extremely", "fully", "greatly", "highly", "hugely", "incredibly",
            "intensely", "particularly", "purely", "quite", "really",
            "remarkably", "so", "substantially", "thoroughly", "totally",
            "tremendously", "unbelievably", "utterly", "very",
        ];
        let decrements = vec![
            "almost", "barely", "hardly", "less", "little", "marginally",
            "occasionally", "partly", "scarcely", "slightly", "somewhat",
        ];

        let mut boosters = HashMap::new();
        for word in increments {
            boosters.insert(word.to_string(), BOOSTER_INCREMENT);
        }
        for word in decrements {
            boosters.insert(word.to_string(), BOOSTER_DECREMENT);
        }

        let negations = vec![
            "not", "no", "never", "none", "nope", "nor", "neither", "nothing",
            "nowhere", "cannot", "cant", "dont", "doesnt", "didnt", "isnt",
            "arent", "wasnt", "werent", "wont", "wouldnt", "shouldnt",
            "couldnt", "hasnt", "havent", "hadnt", "aint", "without",
            "rarely", "seldom", "despite",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            valences,
            boosters,
            negations,
        }
    }

    /// Get the valence of a normalized token
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    /// Get the booster scalar of a normalized token
    pub fn booster(&self, token: &str) -> Option<f64> {
        self.boosters.get(token).copied()
    }

    /// Check if a token negates what follows
    pub fn is_negation(&self, token: &Token) -> bool {
        self.negations.contains(&token.normalized) || token.is_contracted_negation()
    }

    /// Add or replace a token valence; words match lowercased, emoticons
    /// keep their case
    pub fn add_word(&mut self, token: &str, valence: f64) {
        self.valences.insert(normalize_token(token), valence);
    }

    /// Merge a tab-separated lexicon over this one.
    ///
    /// Each line is `token<TAB>mean valence` optionally followed by more
    /// columns, which are ignored. Returns the number of entries read.
    pub fn extend_from_tsv<R: Read>(&mut self, reader: R) -> Result<usize, LexiconError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut count = 0;
        for row in reader.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let (Some(word), Some(value)) = (row.get(0), row.get(1)) else {
                continue;
            };
            if word.is_empty() {
                continue;
            }

            let valence: f64 = value
                .trim()
                .parse()
                .map_err(|_| LexiconError::InvalidValence {
                    line,
                    word: word.to_string(),
                    value: value.to_string(),
                })?;

            self.add_word(word, valence);
            count += 1;
        }

        Ok(count)
    }

    /// Number of tokens with a valence
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
