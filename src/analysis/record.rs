//! Joined per-record result of both models.

use crate::data::TextRecord;
use crate::sentiment::{CompoundScores, PolarityScores, SentimentLabel};
use serde::{Deserialize, Serialize};

/// One scored input record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// 1-based input position
    pub position: usize,
    /// Original text
    pub text: String,
    /// Polarity from the polarity model (-1 to 1)
    pub polarity: f64,
    /// Subjectivity from the polarity model (0 to 1)
    pub subjectivity: f64,
    /// Compound score from the valence model (-1 to 1)
    pub compound: f64,
    /// Label from the valence model
    pub label: SentimentLabel,
}

impl ScoredRecord {
    /// Join both model outputs for a record
    pub fn new(record: &TextRecord, polarity: PolarityScores, compound: CompoundScores) -> Self {
        Self {
            position: record.position,
            text: record.text.clone(),
            polarity: polarity.polarity,
            subjectivity: polarity.subjectivity,
            compound: compound.compound,
            label: compound.label,
        }
    }

    /// Check if the two models point in opposite directions
    pub fn models_disagree(&self) -> bool {
        match self.label {
            SentimentLabel::Positive => self.polarity < 0.0,
            SentimentLabel::Negative => self.polarity > 0.0,
            SentimentLabel::Neutral => false,
        }
    }
}
