//! # Text Scorer
//!
//! Common capability shared by the two independent sentiment models.

use crate::data::TextRecord;
use thiserror::Error;

/// Errors raised by a scoring model on a single record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("record {position} has no text to score ({scorer})")]
    EmptyText { position: usize, scorer: &'static str },
}

/// A pure, deterministic model mapping a record to its own result type
pub trait TextScorer {
    /// Result produced for one record
    type Output;

    /// Model name used in logs and errors
    fn name(&self) -> &'static str;

    /// Score a single record
    fn score(&self, record: &TextRecord) -> Result<Self::Output, ScoringError>;

    /// Score records in order, stopping at the first failure
    fn score_all(&self, records: &[TextRecord]) -> Result<Vec<Self::Output>, ScoringError> {
        records.iter().map(|record| self.score(record)).collect()
    }
}

/// Reject blank records before a model sees them
pub(crate) fn ensure_text(record: &TextRecord, scorer: &'static str) -> Result<(), ScoringError> {
    if record.is_blank() {
        return Err(ScoringError::EmptyText {
            position: record.position,
            scorer,
        });
    }
    Ok(())
}
