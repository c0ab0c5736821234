//! Delimited Text Codec
//!
//! Import with per-row fault isolation and best-effort export. Each input
//! line yields either a surviving [`Record`] or a [`SkippedRow`] carrying the
//! original text and its failure reason; a malformed row never aborts the
//! whole import.

pub mod parser;
pub mod writer;

pub use parser::*;
pub use writer::*;

use crate::record::Record;
use crate::validation::ValidationError;
use thiserror::Error;

/// Per-row import failures, converted into skip reports by the parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("Wrong column count")]
    WrongColumnCount,

    #[error("Age is not an integer: {field}")]
    AgeNotInteger { field: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A rejected input line paired with its failure reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: String,
    pub reason: RowError,
}

/// Outcome of a full import: surviving records plus skip reports
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
}
