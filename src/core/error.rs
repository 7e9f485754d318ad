// src/core/error.rs

use thiserror::Error;

/// Failures the analyzer reports to its callers.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The query could not be split into words, e.g. an unterminated quote.
    #[error("malformed query: {reason}")]
    MalformedInput { reason: String },

    #[error("failed to serialize analysis result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<shell_words::ParseError> for AnalyzerError {
    fn from(err: shell_words::ParseError) -> Self {
        AnalyzerError::MalformedInput { reason: err.to_string() }
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
