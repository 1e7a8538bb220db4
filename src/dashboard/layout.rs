//! # Dashboard Layout
//!
//! Describes the six panels of the figure as plain data. Nothing here
//! touches a drawing surface; see [`super::render`] for that.

use crate::analysis::{AnalysisReport, Histogram, LabelCounts};
use crate::sentiment::SentimentLabel;

/// Figure title
pub const DASHBOARD_TITLE: &str = "Sentiment Analysis Dashboard";

/// Grid rows
pub const GRID_ROWS: usize = 3;

/// Grid columns
pub const GRID_COLUMNS: usize = 2;

/// An RGB color, independent of any drawing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ChartColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const SKY_BLUE: ChartColor = ChartColor::new(135, 206, 235);
pub const PLUM: ChartColor = ChartColor::new(221, 160, 221);
pub const GREEN: ChartColor = ChartColor::new(0, 128, 0);
pub const RED: ChartColor = ChartColor::new(255, 0, 0);
pub const GOLD: ChartColor = ChartColor::new(255, 215, 0);

/// Fixed color of each label, shared by the pie and the count bars
pub fn label_color(label: SentimentLabel) -> ChartColor {
    match label {
        SentimentLabel::Positive => GREEN,
        SentimentLabel::Negative => RED,
        SentimentLabel::Neutral => GOLD,
    }
}

/// One label's share of the distribution
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSlice {
    pub label: SentimentLabel,
    pub count: usize,
    /// Share of all records, 0 to 100
    pub percentage: f64,
    pub color: ChartColor,
}

/// What a panel draws
#[derive(Debug, Clone, PartialEq)]
pub enum PanelKind {
    /// One bar per record at x = position
    RecordBars {
        values: Vec<f64>,
        y_range: (f64, f64),
        zero_baseline: bool,
        color: ChartColor,
    },
    /// Pie of label shares with percentage annotations
    LabelPie { slices: Vec<LabelSlice> },
    /// One bar per label with its raw count
    LabelBars { slices: Vec<LabelSlice> },
    /// Binned distribution of a score
    Histogram {
        histogram: Histogram,
        color: ChartColor,
    },
}

/// A titled chart panel
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: PanelKind,
}

impl Panel {
    fn new(title: &str, x_label: &str, y_label: &str, kind: PanelKind) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            kind,
        }
    }
}

/// The whole figure: a title over a grid of panels in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub title: String,
    pub rows: usize,
    pub columns: usize,
    pub panels: Vec<Panel>,
}

impl DashboardLayout {
    /// Lay out the six panels for a report
    pub fn from_report(report: &AnalysisReport) -> Self {
        let slices = label_slices(&report.counts);

        let panels = vec![
            Panel::new(
                "Polarity per Record",
                "Record Number",
                "Polarity (-1 to +1)",
                PanelKind::RecordBars {
                    values: report.polarities(),
                    y_range: (-1.0, 1.0),
                    zero_baseline: true,
                    color: SKY_BLUE,
                },
            ),
            Panel::new(
                "Subjectivity per Record",
                "Record Number",
                "Subjectivity (0 to 1)",
                PanelKind::RecordBars {
                    values: report.subjectivities(),
                    y_range: (0.0, 1.0),
                    zero_baseline: false,
                    color: PLUM,
                },
            ),
            Panel::new(
                "Compound Sentiment Distribution",
                "",
                "",
                PanelKind::LabelPie {
                    slices: slices.clone(),
                },
            ),
            Panel::new(
                "Compound Sentiment Counts",
                "Sentiment",
                "Number of Records",
                PanelKind::LabelBars { slices },
            ),
            Panel::new(
                "Distribution of Polarity Scores",
                "Polarity",
                "Frequency",
                PanelKind::Histogram {
                    histogram: report.polarity_histogram(),
                    color: SKY_BLUE,
                },
            ),
            Panel::new(
                "Distribution of Subjectivity Scores",
                "Subjectivity",
                "Frequency",
                PanelKind::Histogram {
                    histogram: report.subjectivity_histogram(),
                    color: PLUM,
                },
            ),
        ];

        Self {
            title: DASHBOARD_TITLE.to_string(),
            rows: GRID_ROWS,
            columns: GRID_COLUMNS,
            panels,
        }
    }

    /// Panel at a grid cell
    pub fn panel(&self, row: usize, column: usize) -> Option<&Panel> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.panels.get(row * self.columns + column)
    }
}

/// Slices for the labels present in `counts`
fn label_slices(counts: &LabelCounts) -> Vec<LabelSlice> {
    counts
        .present()
        .into_iter()
        .map(|(label, count)| LabelSlice {
            label,
            count,
            percentage: counts.percentage(label),
            color: label_color(label),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ScoredRecord;

    fn report(labels: &[SentimentLabel]) -> AnalysisReport {
        let records = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| ScoredRecord {
                position: i + 1,
                text: String::new(),
                polarity: 0.1 * i as f64,
                subjectivity: 0.5,
                compound: 0.0,
                label,
            })
            .collect();
        AnalysisReport::from_records(records)
    }

    #[test]
    fn test_six_panels_in_grid() {
        let layout = DashboardLayout::from_report(&report(&[SentimentLabel::Positive]));

        assert_eq!(layout.panels.len(), GRID_ROWS * GRID_COLUMNS);
        assert_eq!(layout.panel(0, 0).unwrap().title, "Polarity per Record");
        assert_eq!(layout.panel(2, 1).unwrap().title, "Distribution of Subjectivity Scores");
        assert!(layout.panel(3, 0).is_none());
    }

    #[test]
    fn test_pie_and_bars_match_counts() {
        let layout = DashboardLayout::from_report(&report(&[
            SentimentLabel::Negative,
            SentimentLabel::Negative,
            SentimentLabel::Positive,
        ]));

        let (PanelKind::LabelPie { slices: pie }, PanelKind::LabelBars { slices: bars }) =
            (&layout.panels[2].kind, &layout.panels[3].kind)
        else {
            panic!("unexpected panel kinds");
        };

        assert_eq!(pie, bars);
        assert_eq!(pie.len(), 2);
        assert_eq!(pie.iter().map(|s| s.count).sum::<usize>(), 3);
        assert!(pie.iter().all(|s| s.label != SentimentLabel::Neutral));
        assert_eq!(pie[1].color, RED);
    }

    #[test]
    fn test_record_bars_follow_input_order() {
        let layout = DashboardLayout::from_report(&report(&[
            SentimentLabel::Neutral,
            SentimentLabel::Neutral,
            SentimentLabel::Neutral,
        ]));

        match &layout.panels[0].kind {
            PanelKind::RecordBars { values, y_range, zero_baseline, .. } => {
                assert_eq!(values.len(), 3);
                assert!(values[0] < values[2]);
                assert_eq!(*y_range, (-1.0, 1.0));
                assert!(zero_baseline);
            }
            other => panic!("unexpected panel: {other:?}"),
        }
    }

    #[test]
    fn test_empty_report_layout() {
        let layout = DashboardLayout::from_report(&AnalysisReport::from_records(Vec::new()));

        assert_eq!(layout.panels.len(), 6);
        match &layout.panels[2].kind {
            PanelKind::LabelPie { slices } => assert!(slices.is_empty()),
            other => panic!("unexpected panel: {other:?}"),
        }
        match &layout.panels[4].kind {
            PanelKind::Histogram { histogram, .. } => {
                assert_eq!(histogram.bins(), 10);
                assert_eq!(histogram.total(), 0);
            }
            other => panic!("unexpected panel: {other:?}"),
        }
    }
}
