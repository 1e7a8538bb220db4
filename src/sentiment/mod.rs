//! # Sentiment Module
//!
//! Two independent lexicon models behind the [`TextScorer`] capability:
//!
//! - [`PolarityScorer`] - continuous polarity and subjectivity
//! - [`CompoundClassifier`] - compound valence score and threshold label

mod compound;
mod lexicon;
mod polarity;
mod scorer;
pub mod tokenizer;
mod valence;

pub use compound::{normalize, CompoundClassifier, CompoundScores, SentimentLabel};
pub use lexicon::{PolarityEntry, PolarityLexicon};
pub use polarity::{PolarityScorer, PolarityScores};
pub use scorer::{ScoringError, TextScorer};
pub use tokenizer::{Token, TokenKind, Tokenizer};
pub use valence::{LexiconError, ValenceLexicon, BOOSTER_DECREMENT, BOOSTER_INCREMENT};
