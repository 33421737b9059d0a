//! Error types for scoring and alignment.

use thiserror::Error;

/// Errors surfaced by scoring-matrix parsing and alignment entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    /// A residue was looked up that the substitution matrix does not define.
    #[error("symbol '{symbol}' is not present in scoring matrix {matrix}")]
    UnknownSymbol { symbol: char, matrix: String },

    /// The textual matrix could not be parsed into a square integer table.
    #[error("malformed scoring matrix {name}: {reason}")]
    MalformedMatrix { name: String, reason: String },
}

impl AlignmentError {
    pub(crate) fn malformed(name: &str, reason: impl Into<String>) -> Self {
        AlignmentError::MalformedMatrix {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
