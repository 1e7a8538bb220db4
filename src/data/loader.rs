//! # Record Loader
//!
//! Parses a CSV text block with a `text` header column into ordered
//! [`TextRecord`]s.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Name of the column holding the record text
pub const TEXT_COLUMN: &str = "text";

/// Errors raised while decomposing input into records
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("malformed quoting on line {line}: {reason}")]
    MalformedQuoting { line: usize, reason: &'static str },

    #[error("header has no `text` column")]
    MissingTextColumn,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read record source: {0}")]
    Io(#[from] std::io::Error),
}

/// A single input text, identified by its 1-based position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    /// Position in the input sequence (starts at 1)
    pub position: usize,
    /// Raw record text
    pub text: String,
}

impl TextRecord {
    /// Create a record at the given position
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// Check if the record has no visible text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl fmt::Display for TextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.position, self.text)
    }
}

/// Parse a CSV block into records, preserving input order.
///
/// Empty input yields an empty vector. Quoting is validated up front so a
/// broken block never produces partial output.
pub fn parse_records(input: &str) -> Result<Vec<TextRecord>, LoaderError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    validate_quoting(input)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::Headers)
        .from_reader(input.as_bytes());

    let column = reader
        .headers()?
        .iter()
        .position(|h| h == TEXT_COLUMN)
        .ok_or(LoaderError::MissingTextColumn)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let text = row.get(column).unwrap_or_default();
        records.push(TextRecord::new(records.len() + 1, text));
    }

    Ok(records)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Reject input whose double quotes do not form well-formed CSV fields.
///
/// The `csv` reader accepts stray quotes silently, so this walks the input
/// once with the RFC 4180 field grammar.
fn validate_quoting(input: &str) -> Result<(), LoaderError> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1;
    let mut quote_line = 1;

    for ch in input.chars() {
        state = match (state, ch) {
            (QuoteState::Quoted, '"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, c) => {
                if c == '\n' {
                    line += 1;
                }
                QuoteState::Quoted
            }
            (QuoteState::QuoteInQuoted, '"') => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, ',') => QuoteState::FieldStart,
            (QuoteState::QuoteInQuoted, '\r') => QuoteState::QuoteInQuoted,
            (QuoteState::QuoteInQuoted, '\n') => {
                line += 1;
                QuoteState::FieldStart
            }
            (QuoteState::QuoteInQuoted, _) => {
                return Err(LoaderError::MalformedQuoting {
                    line,
                    reason: "unexpected character after closing quote",
                });
            }
            (QuoteState::FieldStart, '"') => {
                quote_line = line;
                QuoteState::Quoted
            }
            (QuoteState::Unquoted, '"') => {
                return Err(LoaderError::MalformedQuoting {
                    line,
                    reason: "quote inside unquoted field",
                });
            }
            (_, ',') => QuoteState::FieldStart,
            (_, '\n') => {
                line += 1;
                QuoteState::FieldStart
            }
            _ => QuoteState::Unquoted,
        };
    }

    if state == QuoteState::Quoted {
        return Err(LoaderError::MalformedQuoting {
            line: quote_line,
            reason: "unterminated quoted field",
        });
    }

    Ok(())
}
