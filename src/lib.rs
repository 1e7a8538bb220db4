//! # Sentiment Dashboard
//!
//! Scores short texts with two lexicon sentiment models and summarizes the
//! results in a six-panel dashboard.
//!
//! ## Modules
//!
//! - `data`: CSV record loading and record sources
//! - `sentiment`: Polarity scorer and compound classifier with their lexicons
//! - `analysis`: Per-record joins, label counts and histograms
//! - `dashboard`: Panel layout and SVG rendering
//! - `utils`: Configuration and logging
//!
//! ## Example
//!
//! ```no_run
//! use sentiment_dashboard::{
//!     DashboardLayout, DashboardRenderer, EmbeddedSource, RecordSource, SentimentPipeline,
//!     SvgRenderer,
//! };
//!
//! fn main() -> anyhow::Result<()> {
//!     let records = EmbeddedSource.load()?;
//!     let report = SentimentPipeline::with_builtin_lexicons().analyze(&records)?;
//!
//!     let layout = DashboardLayout::from_report(&report);
//!     SvgRenderer::new("dashboard.svg").render(&layout)?;
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod sentiment;
pub mod utils;

// Re-export main types for convenience
pub use analysis::{AnalysisReport, Histogram, LabelCounts, PipelineStage, ScoredRecord, SentimentPipeline};
pub use dashboard::{
    DashboardLayout, DashboardRenderer, Panel, PanelKind, RenderError, SvgRenderer,
    SvgStringRenderer,
};
pub use data::{
    parse_records, CsvFileSource, EmbeddedSource, InlineSource, LoaderError, RecordSource,
    TextRecord,
};
pub use error::DashboardError;
pub use sentiment::{
    CompoundClassifier, CompoundScores, LexiconError, PolarityLexicon, PolarityScorer,
    PolarityScores, ScoringError, SentimentLabel, TextScorer, ValenceLexicon,
};
pub use utils::{setup_logging, Config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed analysis constants
pub mod defaults {
    /// Compound scores at or above this are Positive
    pub const POSITIVE_THRESHOLD: f64 = 0.05;

    /// Compound scores at or below this are Negative
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    /// Bins per score histogram
    pub const HISTOGRAM_BINS: usize = 10;
}
