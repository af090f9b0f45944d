//! Error types for the scanner family
//!
//! Every scanner reports failures synchronously through [`ScanError`]. Errors
//! carry the cursor offset where the failure was detected; there is no
//! line/column tracking.

use crate::value::ScalarKind;
use thiserror::Error;

/// Result alias used by every scanner entry point
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors produced while scanning a text buffer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    /// A token grew past the configured token capacity
    #[error("Token exceeds capacity of {capacity} code points at offset {position}")]
    BufferOverflow { capacity: usize, position: usize },

    /// A backslash was the last code point inside a quoted value
    #[error("Truncated escape sequence at offset {position}")]
    TruncatedEscape { position: usize },

    /// A token with numeric shape was rejected by the decimal parser
    #[error("Invalid {kind} literal '{literal}': {message}")]
    InvalidNumericLiteral {
        literal: String,
        kind: ScalarKind,
        message: String,
    },

    /// The text does not have the structure the scanner requires
    #[error("Unexpected structure at offset {position}: {message}")]
    UnexpectedStructure { message: String, position: usize },

    /// List/map literals nested deeper than the configured limit
    #[error("Maximum nesting depth of {limit} exceeded at offset {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

impl ScanError {
    pub(crate) fn unexpected(message: impl Into<String>, position: usize) -> Self {
        ScanError::UnexpectedStructure {
            message: message.into(),
            position,
        }
    }

    /// Returns the cursor offset the error was detected at, when known
    pub fn position(&self) -> Option<usize> {
        match self {
            ScanError::BufferOverflow { position, .. }
            | ScanError::TruncatedEscape { position }
            | ScanError::UnexpectedStructure { position, .. }
            | ScanError::NestingTooDeep { position, .. } => Some(*position),
            ScanError::InvalidNumericLiteral { .. } => None,
        }
    }

    /// Returns true if a best-effort loop may skip past this error.
    ///
    /// Only malformed structure is skippable. Capacity, escape and numeric
    /// failures always reach the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScanError::UnexpectedStructure { .. })
    }

    /// Suggests how to fix the input that caused this error
    pub fn suggest_fix(&self) -> Vec<String> {
        match self {
            ScanError::BufferOverflow { capacity, .. } => vec![
                format!("Split the token so it stays under {} code points", capacity),
                "Raise ScanConfig::token_capacity".to_string(),
            ],
            ScanError::TruncatedEscape { .. } => vec![
                "Close the quoted value after the escaped character".to_string(),
                "Remove the trailing backslash".to_string(),
            ],
            ScanError::InvalidNumericLiteral { literal, .. } => {
                vec![format!("Quote '{}' to keep it as a string", literal)]
            }
            ScanError::UnexpectedStructure { .. } => Vec::new(),
            ScanError::NestingTooDeep { .. } => {
                vec!["Raise ScanConfig::max_depth or flatten the literal".to_string()]
            }
        }
    }
}
