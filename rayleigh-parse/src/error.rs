//! Parse error types.

use thiserror::Error;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading frame text.
///
/// Line numbers are 1-based positions in the original input.
#[derive(Error, Debug)]
pub enum Error {
    /// Standard-format line without exactly three fields.
    #[error("line {line}: expected 3 integer fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// Standard-format field that is not an integer literal.
    #[error("line {line}: invalid integer {token:?}")]
    InvalidInteger { line: usize, token: String },

    /// Bracketed tuple rejected by the numeric literal grammar.
    #[error("line {line}: malformed hit tuple {tuple}: {source}")]
    MalformedTuple {
        line: usize,
        tuple: String,
        #[source]
        source: serde_json::Error,
    },

    /// Hit tuple with no closing bracket on its line.
    #[error("line {line}: unclosed hit tuple {tuple}")]
    UnclosedTuple { line: usize, tuple: String },

    /// Bracketed tuple with fewer than three elements.
    #[error("line {line}: hit tuple {tuple} has {arity} element(s), expected at least 3")]
    TupleArity {
        line: usize,
        tuple: String,
        arity: usize,
    },

    /// Values parsed but do not form a valid hit.
    #[error("line {line}: {source}")]
    InvalidHit {
        line: usize,
        #[source]
        source: rayleigh_core::Error,
    },

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
