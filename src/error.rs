//! Crate-level error type

use crate::dashboard::RenderError;
use crate::data::LoaderError;
use crate::sentiment::{LexiconError, ScoringError};
use crate::utils::ConfigError;
use thiserror::Error;

/// Any failure of a dashboard run
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("load error: {0}")]
    Load(#[from] LoaderError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_records;

    fn load(input: &str) -> Result<usize> {
        Ok(parse_records(input)?.len())
    }

    #[test]
    fn test_loader_error_converts() {
        let err = load("text\n\"open\n").unwrap_err();
        assert!(matches!(err, DashboardError::Load(LoaderError::MalformedQuoting { .. })));
        assert!(err.to_string().starts_with("load error: malformed quoting"));
    }

    #[test]
    fn test_scoring_error_converts() {
        let err: DashboardError = ScoringError::EmptyText {
            position: 4,
            scorer: "compound",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "scoring error: record 4 has no text to score (compound)"
        );
    }
}
