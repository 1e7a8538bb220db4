//! # Polarity Lexicon
//!
//! Word-level polarity and subjectivity assessments used by the
//! [`PolarityScorer`](super::PolarityScorer).

use super::tokenizer::{normalize_token, Token};
use std::collections::{HashMap, HashSet};

/// Polarity and subjectivity of a single lexicon word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityEntry {
    /// Sentiment direction, -1 to 1
    pub polarity: f64,
    /// Opinion strength, 0 to 1
    pub subjectivity: f64,
}

/// General-purpose English polarity lexicon
///
/// Built once per run and shared read-only with the scorer.
#[derive(Debug, Clone)]
pub struct PolarityLexicon {
    /// Word to assessment mapping
    words: HashMap<String, PolarityEntry>,
    /// Words that flip the next assessment
    negations: HashSet<String>,
    /// Adverbs that scale the next assessment
    intensifiers: HashMap<String, f64>,
}

impl Default for PolarityLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PolarityLexicon {
    /// Build the lexicon shipped with the crate
    pub fn builtin() -> Self {
        let mut words = HashMap::new();

        // (word, polarity, subjectivity)
        let entries = vec![
            // Positive
            ("love", 0.5, 0.6),
            ("loved", 0.7, 0.8),
            ("lovely", 0.5, 0.75),
            ("like", 0.2, 0.4),
            ("liked", 0.3, 0.5),
            ("good", 0.7, 0.6),
            ("great", 0.8, 0.75),
            ("nice", 0.6, 1.0),
            ("excellent", 1.0, 1.0),
            ("amazing", 0.9, 0.9),
            ("awesome", 1.0, 1.0),
            ("wonderful", 1.0, 1.0),
            ("fantastic", 0.9, 0.9),
            ("perfect", 1.0, 1.0),
            ("best", 1.0, 0.3),
            ("better", 0.5, 0.5),
            ("beautiful", 0.85, 1.0),
            ("happy", 0.8, 1.0),
            ("glad", 0.5, 1.0),
            ("pleased", 0.5, 1.0),
            ("excited", 0.375, 0.75),
            ("fun", 0.3, 0.2),
            ("cool", 0.35, 0.65),
            ("helpful", 0.5, 0.5),
            ("friendly", 0.375, 0.5),
            ("easy", 0.433, 0.833),
            ("fast", 0.2, 0.6),
            ("quick", 0.333, 0.5),
            ("clean", 0.367, 0.683),
            ("free", 0.4, 0.8),
            ("new", 0.136, 0.455),
            ("fresh", 0.3, 0.5),
            ("interesting", 0.5, 0.5),
            ("impressive", 1.0, 1.0),
            ("brilliant", 0.9, 1.0),
            ("enjoyable", 0.5, 0.6),
            ("smooth", 0.4, 0.6),
            ("reliable", 0.5, 0.6),
            ("special", 0.357, 0.571),
            ("sure", 0.5, 0.889),
            ("fine", 0.417, 0.5),
            ("okay", 0.5, 0.5),
            ("ok", 0.5, 0.5),
            ("right", 0.286, 0.536),
            ("important", 0.4, 1.0),
            ("thankful", 0.5, 0.7),
            ("grateful", 0.6, 0.8),
            // Negative
            ("bad", -0.7, 0.667),
            ("worse", -0.4, 0.6),
            ("worst", -1.0, 1.0),
            ("terrible", -1.0, 1.0),
            ("awful", -1.0, 1.0),
            ("horrible", -1.0, 1.0),
            ("hate", -0.8, 0.9),
            ("hated", -0.9, 0.7),
            ("sad", -0.5, 1.0),
            ("unhappy", -0.6, 0.9),
            ("angry", -0.5, 1.0),
            ("upset", -0.5, 0.8),
            ("annoying", -0.8, 0.9),
            ("annoyed", -0.4, 0.8),
            ("frustrating", -0.4, 0.7),
            ("frustrated", -0.7, 0.7),
            ("disappointing", -0.6, 0.7),
            ("disappointed", -0.75, 0.75),
            ("delayed", -0.2, 0.4),
            ("late", -0.3, 0.6),
            ("slow", -0.3, 0.4),
            ("poor", -0.4, 0.6),
            ("broken", -0.4, 0.4),
            ("wrong", -0.5, 0.9),
            ("boring", -0.6, 1.0),
            ("ugly", -0.7, 1.0),
            ("difficult", -0.5, 1.0),
            ("confusing", -0.3, 0.5),
            ("useless", -0.5, 0.2),
            ("rude", -0.3, 0.6),
            ("expensive", -0.5, 0.7),
            ("worried", -0.3, 0.5),
            ("stupid", -0.8, 1.0),
            ("crazy", -0.6, 0.9),
            ("dirty", -0.6, 0.8),
            ("sorry", -0.5, 1.0),
            ("lost", -0.3, 0.5),
            ("cancelled", -0.3, 0.4),
            // Emoticons
            (":)", 0.5, 1.0),
            (":-)", 0.5, 1.0),
            (";)", 0.5, 1.0),
            ("=)", 0.5, 1.0),
            (":D", 0.8, 1.0),
            ("<3", 0.6, 1.0),
            (":(", -0.75, 1.0),
            (":-(", -0.75, 1.0),
            ("=(", -0.75, 1.0),
            (":|", 0.0, 1.0),
        ];

        for (word, polarity, subjectivity) in entries {
            words.insert(
                word.to_string(),
                PolarityEntry {
                    polarity,
                    subjectivity,
                },
            );
        }

        let negations = vec!["not", "no", "never", "cannot", "nor", "neither"]
            .into_iter()
            .map(String::from)
            .collect();

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very".to_string(), 1.3);
        intensifiers.insert("really".to_string(), 1.3);
        intensifiers.insert("so".to_string(), 1.3);
        intensifiers.insert("too".to_string(), 1.2);
        intensifiers.insert("extremely".to_string(), 1.5);
        intensifiers.insert("incredibly".to_string(), 1.5);
        intensifiers.insert("absolutely".to_string(), 1.4);
        intensifiers.insert("super".to_string(), 1.4);
        intensifiers.insert("highly".to_string(), 1.3);
        intensifiers.insert("truly".to_string(), 1.2);
        intensifiers.insert("quite".to_string(), 1.1);
        intensifiers.insert("rather".to_string(), 0.9);
        intensifiers.insert("somewhat".to_string(), 0.7);
        intensifiers.insert("slightly".to_string(), 0.5);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Get the assessment for a normalized token
    pub fn get(&self, word: &str) -> Option<PolarityEntry> {
        self.words.get(word).copied()
    }

    /// Check if a token is a negation
    pub fn is_negation(&self, token: &Token) -> bool {
        self.negations.contains(&token.normalized) || token.is_contracted_negation()
    }

    /// Get the multiplier of an intensifier
    pub fn get_intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// Add or replace a word, clamping values into their ranges
    pub fn add_word(&mut self, word: &str, polarity: f64, subjectivity: f64) {
        self.words.insert(
            normalize_token(word),
            PolarityEntry {
                polarity: polarity.clamp(-1.0, 1.0),
                subjectivity: subjectivity.clamp(0.0, 1.0),
            },
        );
    }

    /// Number of sentiment-bearing words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
