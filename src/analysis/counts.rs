//! # Label Counts
//!
//! Tally of records per [`SentimentLabel`].

use super::record::ScoredRecord;
use crate::sentiment::SentimentLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of records carrying each label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    counts: BTreeMap<SentimentLabel, usize>,
}

impl LabelCounts {
    /// Count labels over all scored records
    pub fn from_records(records: &[ScoredRecord]) -> Self {
        let mut counts = BTreeMap::new();
        for record in records {
            *counts.entry(record.label).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for a label, zero if absent
    pub fn get(&self, label: SentimentLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Labels with a non-zero count, in display order
    pub fn present(&self) -> Vec<(SentimentLabel, usize)> {
        SentimentLabel::ALL
            .iter()
            .map(|&label| (label, self.get(label)))
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    /// Share of records with `label`, 0 to 100
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(label) as f64 * 100.0 / total as f64
    }
}

impl fmt::Display for LabelCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = SentimentLabel::ALL
            .iter()
            .map(|&label| format!("{}={}", label, self.get(label)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(position: usize, label: SentimentLabel) -> ScoredRecord {
        ScoredRecord {
            position,
            text: format!("record {position}"),
            polarity: 0.0,
            subjectivity: 0.0,
            compound: 0.0,
            label,
        }
    }

    #[test]
    fn test_counts_sum_to_records() {
        let records = vec![
            record(1, SentimentLabel::Positive),
            record(2, SentimentLabel::Negative),
            record(3, SentimentLabel::Positive),
        ];
        let counts = LabelCounts::from_records(&records);

        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(SentimentLabel::Positive), 2);
        assert_eq!(counts.get(SentimentLabel::Neutral), 0);
    }

    #[test]
    fn test_present_omits_zero_labels() {
        let counts = LabelCounts::from_records(&[record(1, SentimentLabel::Neutral)]);
        assert_eq!(counts.present(), vec![(SentimentLabel::Neutral, 1)]);
    }

    #[test]
    fn test_empty() {
        let counts = LabelCounts::from_records(&[]);
        assert!(counts.is_empty());
        assert!(counts.present().is_empty());
        assert_eq!(counts.percentage(SentimentLabel::Positive), 0.0);
    }

    #[test]
    fn test_percentage() {
        let records = vec![
            record(1, SentimentLabel::Positive),
            record(2, SentimentLabel::Negative),
            record(3, SentimentLabel::Negative),
            record(4, SentimentLabel::Negative),
        ];
        let counts = LabelCounts::from_records(&records);
        assert_eq!(counts.percentage(SentimentLabel::Negative), 75.0);
        assert_eq!(counts.to_string(), "Positive=1, Negative=3, Neutral=0");
    }
}
