//! # Polarity/Subjectivity Scorer
//!
//! Averages lexicon assessments over a record, applying negations and
//! intensifiers to the word that follows them.

use super::lexicon::PolarityLexicon;
use super::scorer::{ensure_text, ScoringError, TextScorer};
use super::tokenizer::Tokenizer;
use crate::data::TextRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Polarity multiplier applied after a negation
const NEGATION_SCALAR: f64 = -0.5;

/// Continuous scores for one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    /// -1 (very negative) to 1 (very positive)
    pub polarity: f64,
    /// 0 (objective) to 1 (subjective)
    pub subjectivity: f64,
}

/// Lexicon-based polarity and subjectivity model
pub struct PolarityScorer {
    lexicon: Arc<PolarityLexicon>,
    tokenizer: Tokenizer,
}

impl PolarityScorer {
    /// Create a scorer over an already loaded lexicon
    pub fn new(lexicon: Arc<PolarityLexicon>) -> Self {
        Self {
            lexicon,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Score raw text
    ///
    /// Text without any lexicon word scores (0, 0).
    pub fn analyze(&self, text: &str) -> PolarityScores {
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();

        let mut negated = false;
        let mut intensity = 1.0;

        for token in self.tokenizer.tokenize(text) {
            let word = token.normalized.as_str();

            if self.lexicon.is_negation(&token) {
                negated = true;
                continue;
            }

            if let Some(mult) = self.lexicon.get_intensifier(word) {
                intensity *= mult;
                continue;
            }

            if let Some(entry) = self.lexicon.get(word) {
                let mut polarity = entry.polarity * intensity;
                if negated {
                    polarity *= NEGATION_SCALAR;
                }
                polarities.push(polarity.clamp(-1.0, 1.0));
                subjectivities.push((entry.subjectivity * intensity).clamp(0.0, 1.0));
            }

            negated = false;
            intensity = 1.0;
        }

        PolarityScores {
            polarity: mean(&polarities).clamp(-1.0, 1.0),
            subjectivity: mean(&subjectivities).clamp(0.0, 1.0),
        }
    }
}

impl TextScorer for PolarityScorer {
    type Output = PolarityScores;

    fn name(&self) -> &'static str {
        "polarity"
    }

    fn score(&self, record: &TextRecord) -> Result<PolarityScores, ScoringError> {
        ensure_text(record, self.name())?;
        Ok(self.analyze(&record.text))
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
