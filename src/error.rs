//! Error types for tm-tools.
//!
//! Input errors always carry the 1-based line number and the raw line so
//! the diagnostic points straight at the offending record.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmToolsError {
    /// Too few fields, or a missing delimiter
    #[error("line {line}: malformed record ({reason}): {content:?}")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    /// Non-numeric payload where a number was expected
    #[error("line {line}: '{value}' is not a valid number: {content:?}")]
    NumericParse {
        line: usize,
        content: String,
        value: String,
    },

    /// Digit-derived key does not fit in a u32
    #[error("line {line}: route number {digits} is out of range: {content:?}")]
    OutOfRangeKey {
        line: usize,
        content: String,
        digits: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TmToolsError {
    pub fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        TmToolsError::MalformedRecord {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }

    /// Line number of the offending record, if this is an input error
    pub fn line(&self) -> Option<usize> {
        match self {
            TmToolsError::MalformedRecord { line, .. }
            | TmToolsError::NumericParse { line, .. }
            | TmToolsError::OutOfRangeKey { line, .. } => Some(*line),
            TmToolsError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TmToolsError>;
