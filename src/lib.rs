//! Roster Codec - Record Validation and Dual-Codec Serialization
//!
//! This crate ingests comma-delimited roster rows with per-row fault isolation,
//! validates and normalizes the surviving records, and compares a compact
//! tag-length-value binary encoding against the textual rendering for size
//! and speed. One malformed row never blocks ingestion of the rest; every
//! rejected row is reported with its original text and failure reason.

use thiserror::Error;

// Re-export core types and modules
pub mod benchmark;
pub mod csv;
pub mod record;
pub mod validation;
pub mod wire;

pub use benchmark::*;
pub use csv::*;
pub use record::*;
pub use validation::*;
pub use wire::*;

/// Magic number identifying an encoded record sequence
pub const SEQUENCE_MAGIC: u32 = 0xFEEDC0DE;

/// Binary format version
pub const FORMAT_VERSION: u8 = 1;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed row: {0}")]
    MalformedRow(#[from] RowError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Round-trip mismatch: decoded records differ from input")]
    RoundTripMismatch,
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
