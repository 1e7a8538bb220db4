//! # Data Module
//!
//! Record loading and the sources that feed it.

mod loader;
mod sample;
mod source;

pub use loader::{parse_records, LoaderError, TextRecord, TEXT_COLUMN};
pub use sample::SAMPLE_CSV;
pub use source::{CsvFileSource, EmbeddedSource, InlineSource, RecordSource};
