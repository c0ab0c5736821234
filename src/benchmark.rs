//! Codec Benchmark Harness
//!
//! Times the binary and textual encodings of one record sequence and reports
//! byte sizes alongside wall-clock durations. Purely descriptive: the report
//! carries no verdict beyond the mandatory round-trip equality check.

use crate::record::Record;
use crate::{csv, wire, PipelineError};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Size and timing comparison of the two codecs for one record sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecReport {
    /// Bytes in the binary encoding
    pub binary_size: usize,
    /// UTF-8 bytes in the rendered text form
    pub text_size: usize,
    /// Wall-clock time of the binary encode call
    pub encode_duration: Duration,
    /// Wall-clock time of producing the rendered text's UTF-8 bytes
    pub render_duration: Duration,
}

/// Measure both codecs over `records` without mutating them.
///
/// The binary encoding is decoded back and compared field-for-field against
/// the input before the report is returned; a divergence is an error, not a
/// report field.
pub fn compare_codecs(records: &[Record]) -> crate::Result<CodecReport> {
    let encode_start = Instant::now();
    let binary = wire::encode(records);
    let encode_duration = encode_start.elapsed();

    let restored = wire::decode(&binary)?;
    if restored.as_slice() != records {
        return Err(PipelineError::RoundTripMismatch);
    }

    let render_start = Instant::now();
    let text = csv::render_csv(records).into_bytes();
    let render_duration = render_start.elapsed();

    Ok(CodecReport {
        binary_size: binary.len(),
        text_size: text.len(),
        encode_duration,
        render_duration,
    })
}
