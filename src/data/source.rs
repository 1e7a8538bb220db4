//! # Record Sources
//!
//! Providers of the raw CSV block handed to the loader. The embedded sample
//! is only the default; callers inject any [`RecordSource`].

use super::loader::{parse_records, LoaderError, TextRecord};
use super::sample::SAMPLE_CSV;
use std::path::PathBuf;
use tracing::debug;

/// A provider of an ordered batch of text records
pub trait RecordSource {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Produce the records of this source, in order
    fn load(&self) -> Result<Vec<TextRecord>, LoaderError>;
}

/// The five-row dataset compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl RecordSource for EmbeddedSource {
    fn name(&self) -> &str {
        "embedded sample"
    }

    fn load(&self) -> Result<Vec<TextRecord>, LoaderError> {
        parse_records(SAMPLE_CSV)
    }
}

/// An owned CSV block
#[derive(Debug, Clone)]
pub struct InlineSource {
    csv: String,
}

impl InlineSource {
    pub fn new(csv: impl Into<String>) -> Self {
        Self { csv: csv.into() }
    }
}

impl RecordSource for InlineSource {
    fn name(&self) -> &str {
        "inline"
    }

    fn load(&self) -> Result<Vec<TextRecord>, LoaderError> {
        parse_records(&self.csv)
    }
}

/// A CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    display: String,
}

impl CsvFileSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

impl RecordSource for CsvFileSource {
    fn name(&self) -> &str {
        &self.display
    }

    fn load(&self) -> Result<Vec<TextRecord>, LoaderError> {
        let content = std::fs::read_to_string(&self.path)?;
        debug!("Read {} bytes from {}", content.len(), self.display);
        parse_records(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_source() {
        let records = EmbeddedSource.load().unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].position, 1);
        assert_eq!(records[4].position, 5);
    }

    #[test]
    fn test_inline_source() {
        let source = InlineSource::new("text\n\"a\"\n\"b\"\n");
        let records = source.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(source.name(), "inline");
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "text").unwrap();
        writeln!(file, "\"From a file, with a comma\"").unwrap();

        let source = CsvFileSource::new(file.path());
        let records = source.load().unwrap();
        assert_eq!(records, vec![TextRecord::new(1, "From a file, with a comma")]);
    }

    #[test]
    fn test_missing_file() {
        let source = CsvFileSource::new("/definitely/not/here.csv");
        assert!(matches!(source.load(), Err(LoaderError::Io(_))));
    }
}
