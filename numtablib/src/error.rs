//! Error types for numtablib

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to convert a token within a single line.
///
/// `column` is the 1-based position of the token being converted.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("column {column}: {kind}")]
pub struct ParseError {
    pub column: usize,
    pub kind: ParseErrorKind,
}

/// Reason a token could not be converted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Token is not a floating-point number
    #[error("invalid number '{token}': {reason}")]
    InvalidNumber {
        token: String,
        reason: ParseFloatError,
    },
}

/// Errors that can occur while reading a table
///
/// Causes are part of each message, not error sources.
#[derive(Error, Debug)]
pub enum NumtabError {
    /// The first line is missing or yields no column names
    #[error("header is empty: the first line has no column names")]
    EmptyHeader,

    /// A data row has a different number of values than the header
    #[error("error parsing line {line}: expected {expected} columns, found {actual}")]
    RowLengthMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A token in a data row could not be converted
    #[error("error parsing line {line}: {error}")]
    Parse { line: usize, error: ParseError },

    /// Failed to open or read the input file
    #[error("failed to read file '{path}': {reason}")]
    FileRead {
        path: PathBuf,
        reason: std::io::Error,
    },

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl NumtabError {
    /// Data line (1-based, header excluded) the error was found on, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            NumtabError::RowLengthMismatch { line, .. } | NumtabError::Parse { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}
