//! # Analysis Module
//!
//! Joins per-record scores, counts labels and bins score distributions.

mod counts;
mod histogram;
mod pipeline;
mod record;

pub use counts::LabelCounts;
pub use histogram::Histogram;
pub use pipeline::{AnalysisReport, PipelineStage, SentimentPipeline};
pub use record::ScoredRecord;
