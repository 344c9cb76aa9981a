use thiserror::Error;

use crate::adapter::{AdapterError, Format};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No format accepted '{input}' (tried {})", tried(.attempts))]
    AllFormatsFailed {
        input: String,
        attempts: Vec<(Format, AdapterError)>,
    },

    #[error("Invalid {format} version '{input}': {source}")]
    FormatFailed {
        input: String,
        format: Format,
        source: AdapterError,
    },

    #[error("Invalid {format} version '{input}': {reason}")]
    InvalidFields {
        input: String,
        format: Format,
        reason: String,
    },

    #[error("Format {format} is disabled: cannot parse '{input}'")]
    FormatDisabled { input: String, format: Format },
}

impl ParseError {
    /// The input that could not be parsed
    pub fn input(&self) -> &str {
        match self {
            ParseError::AllFormatsFailed { input, .. }
            | ParseError::FormatFailed { input, .. }
            | ParseError::InvalidFields { input, .. }
            | ParseError::FormatDisabled { input, .. } => input,
        }
    }

    /// The formats that were tried before giving up
    pub fn attempted(&self) -> Vec<Format> {
        match self {
            ParseError::AllFormatsFailed { attempts, .. } => {
                attempts.iter().map(|(format, _)| *format).collect()
            }
            ParseError::FormatFailed { format, .. }
            | ParseError::InvalidFields { format, .. }
            | ParseError::FormatDisabled { format, .. } => vec![*format],
        }
    }
}

fn tried(attempts: &[(Format, AdapterError)]) -> String {
    if attempts.is_empty() {
        return "no formats".to_string();
    }
    attempts
        .iter()
        .map(|(format, _)| format.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    #[error("Cannot order versions with differing local metadata: {left} vs {right}")]
    LocalMismatch { left: String, right: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("Unsupported verple protocol version: {0}")]
    UnsupportedVersion(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

/// Any failure raised by the library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Ordering(#[from] OrderingError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
