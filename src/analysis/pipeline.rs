//! # Sentiment Pipeline
//!
//! Runs both scorers over a batch and aggregates the results. The run is a
//! single linear pass: Loaded → Scored → Aggregated, then the caller renders.

use super::counts::LabelCounts;
use super::histogram::Histogram;
use super::record::ScoredRecord;
use crate::data::TextRecord;
use crate::defaults::HISTOGRAM_BINS;
use crate::error::Result;
use crate::sentiment::{
    CompoundClassifier, LexiconError, PolarityLexicon, PolarityScorer, ScoringError, TextScorer,
    ValenceLexicon,
};
use crate::utils::InputConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Stage reached by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStage {
    Loaded,
    Scored,
    Aggregated,
    Rendered,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Loaded => "loaded",
            PipelineStage::Scored => "scored",
            PipelineStage::Aggregated => "aggregated",
            PipelineStage::Rendered => "rendered",
        };
        f.write_str(name)
    }
}

/// Scored records plus their label tally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// One entry per input record, in input order
    pub records: Vec<ScoredRecord>,
    /// Label counts over `records`
    pub counts: LabelCounts,
}

impl AnalysisReport {
    /// Aggregate already scored records
    pub fn from_records(records: Vec<ScoredRecord>) -> Self {
        let counts = LabelCounts::from_records(&records);
        Self { records, counts }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Polarity series in record order
    pub fn polarities(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.polarity).collect()
    }

    /// Subjectivity series in record order
    pub fn subjectivities(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.subjectivity).collect()
    }

    /// Polarity distribution over [-1, 1]
    pub fn polarity_histogram(&self) -> Histogram {
        Histogram::new(&self.polarities(), -1.0..1.0, HISTOGRAM_BINS)
    }

    /// Subjectivity distribution over [0, 1]
    pub fn subjectivity_histogram(&self) -> Histogram {
        Histogram::new(&self.subjectivities(), 0.0..1.0, HISTOGRAM_BINS)
    }

    /// Mean polarity, 0 when empty
    pub fn mean_polarity(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.records.iter().map(|r| r.polarity).sum::<f64>() / self.records.len() as f64
    }

    /// Records where the two models point in opposite directions
    pub fn disagreements(&self) -> usize {
        self.records.iter().filter(|r| r.models_disagree()).count()
    }
}

/// Both sentiment models, applied record by record
pub struct SentimentPipeline {
    polarity: PolarityScorer,
    compound: CompoundClassifier,
}

impl SentimentPipeline {
    /// Create a pipeline from two ready scorers
    pub fn new(polarity: PolarityScorer, compound: CompoundClassifier) -> Self {
        Self { polarity, compound }
    }

    /// Create a pipeline over the builtin lexicons
    pub fn with_builtin_lexicons() -> Self {
        Self::new(
            PolarityScorer::new(Arc::new(PolarityLexicon::builtin())),
            CompoundClassifier::new(Arc::new(ValenceLexicon::builtin())),
        )
    }

    /// Build both lexicons once, merging the configured valence lexicon
    /// file over the builtin one
    pub fn from_config(input: &InputConfig) -> Result<Self> {
        let mut valence = ValenceLexicon::builtin();

        if let Some(path) = &input.lexicon {
            let file = File::open(path).map_err(LexiconError::from)?;
            let added = valence.extend_from_tsv(file)?;
            info!("Merged {} lexicon entries from {}", added, path);
            if added == 0 {
                warn!("Lexicon {} contributed no entries", path);
            }
        }

        Ok(Self::new(
            PolarityScorer::new(Arc::new(PolarityLexicon::builtin())),
            CompoundClassifier::new(Arc::new(valence)),
        ))
    }

    /// Score every record with both models and join by position.
    ///
    /// The first scoring failure aborts the batch so every input keeps a
    /// matching output.
    pub fn score_records(
        &self,
        records: &[TextRecord],
    ) -> std::result::Result<Vec<ScoredRecord>, ScoringError> {
        let polarities = self.polarity.score_all(records)?;
        let compounds = self.compound.score_all(records)?;

        let scored = records
            .iter()
            .zip(polarities.into_iter().zip(compounds))
            .map(|(record, (polarity, compound))| {
                let scored = ScoredRecord::new(record, polarity, compound);
                debug!(
                    "#{} polarity={:.3} subjectivity={:.3} compound={:.4} label={}",
                    scored.position, scored.polarity, scored.subjectivity, scored.compound, scored.label
                );
                if scored.models_disagree() {
                    debug!("#{} polarity and compound label point in opposite directions", scored.position);
                }
                scored
            })
            .collect();

        Ok(scored)
    }

    /// Score and aggregate a loaded batch
    pub fn analyze(
        &self,
        records: &[TextRecord],
    ) -> std::result::Result<AnalysisReport, ScoringError> {
        info!("Pipeline {}: {} records", PipelineStage::Loaded, records.len());

        let scored = self.score_records(records)?;
        info!("Pipeline {}: {} records", PipelineStage::Scored, scored.len());

        let report = AnalysisReport::from_records(scored);
        info!("Pipeline {}: {}", PipelineStage::Aggregated, report.counts);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::sentiment::SentimentLabel;
    use std::io::Write;

    fn pipeline() -> SentimentPipeline {
        SentimentPipeline::with_builtin_lexicons()
    }

    #[test]
    fn test_positions_preserved() {
        let records = vec![
            TextRecord::new(1, "Great service"),
            TextRecord::new(2, "Great service"),
            TextRecord::new(3, "Awful service"),
        ];
        let report = pipeline().analyze(&records).unwrap();

        let positions: Vec<usize> = report.records.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(report.records[0], ScoredRecord { position: 1, ..report.records[1].clone() });
    }

    #[test]
    fn test_scoring_failure_aborts() {
        let records = vec![TextRecord::new(1, "Fine"), TextRecord::new(2, "")];
        let err = pipeline().analyze(&records).unwrap_err();
        assert!(matches!(err, ScoringError::EmptyText { position: 2, .. }));
    }

    #[test]
    fn test_empty_batch() {
        let report = pipeline().analyze(&[]).unwrap();
        assert!(report.is_empty());
        assert!(report.counts.is_empty());
        assert_eq!(report.polarity_histogram().total(), 0);
        assert_eq!(report.mean_polarity(), 0.0);
    }

    #[test]
    fn test_from_config_merges_lexicon_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hodl\t2.5\t0.5").unwrap();

        let input = InputConfig {
            path: None,
            lexicon: Some(file.path().display().to_string()),
        };
        let pipeline = SentimentPipeline::from_config(&input).unwrap();
        let report = pipeline.analyze(&[TextRecord::new(1, "we hodl")]).unwrap();

        assert_eq!(report.records[0].label, SentimentLabel::Positive);
    }

    #[test]
    fn test_from_config_without_lexicon_uses_builtin() {
        let pipeline = SentimentPipeline::from_config(&InputConfig::default()).unwrap();
        let report = pipeline.analyze(&[TextRecord::new(1, "we hodl")]).unwrap();
        assert_eq!(report.records[0].label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_from_config_missing_lexicon_file() {
        let input = InputConfig {
            path: None,
            lexicon: Some("/no/such/lexicon.tsv".to_string()),
        };
        let err = SentimentPipeline::from_config(&input).err().unwrap();
        assert!(matches!(err, DashboardError::Lexicon(LexiconError::Io(_))));
    }

    #[test]
    fn test_histograms_cover_all_records() {
        let records = vec![
            TextRecord::new(1, "I love it"),
            TextRecord::new(2, "I hate it"),
            TextRecord::new(3, "It is a chair"),
        ];
        let report = pipeline().analyze(&records).unwrap();

        assert_eq!(report.polarity_histogram().bins(), HISTOGRAM_BINS);
        assert_eq!(report.polarity_histogram().total(), 3);
        assert_eq!(report.subjectivity_histogram().total(), 3);
        assert_eq!(report.counts.get(SentimentLabel::Neutral), 1);
    }
}
