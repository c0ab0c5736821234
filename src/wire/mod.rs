//! Binary Sequence Codec
//!
//! Self-describing tag-length-value encoding of an ordered record sequence:
//! a fixed sequence header followed by, per record, three length-prefixed
//! fields in `Name, Age, Email` order. The encoding carries enough metadata
//! (magic, version, count, payload size, checksum, field tags and lengths)
//! to reconstruct the sequence without any external schema.

pub mod decoder;
pub mod encoder;

pub use decoder::*;
pub use encoder::*;

use crate::{FORMAT_VERSION, SEQUENCE_MAGIC};
use num_enum::TryFromPrimitive;
use thiserror::Error;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// Decoding errors for corrupt, truncated, or incompatible buffers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Buffer too small: need {need} bytes, got {got}")]
    BufferTooSmall { need: usize, got: usize },

    #[error("Invalid magic number: expected {expected:#x}, got {actual:#x}")]
    InvalidMagic { expected: u32, actual: u32 },

    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u8),

    #[error("Checksum mismatch: expected {expected:#x}, calculated {calculated:#x}")]
    ChecksumMismatch { expected: u32, calculated: u32 },

    #[error("Payload size mismatch: header declares {declared} bytes, got {actual}")]
    PayloadSizeMismatch { declared: usize, actual: usize },

    #[error("Truncated field at offset {offset}")]
    TruncatedField { offset: usize },

    #[error("Unknown field tag: {0}")]
    UnknownTag(u8),

    #[error("Unexpected field tag: expected {expected:?}, got {actual:?}")]
    UnexpectedTag { expected: FieldTag, actual: FieldTag },

    #[error("Field {tag:?} has wrong length: expected {expected} bytes, got {actual}")]
    FieldLengthMismatch {
        tag: FieldTag,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid UTF-8 in {tag:?} field")]
    InvalidUtf8 { tag: FieldTag },

    #[error("Trailing bytes after last record: {remaining}")]
    TrailingBytes { remaining: usize },
}

/// Sequence Header (20 bytes)
///
/// Prefixes every encoded sequence:
///
/// ```text
/// ┌─────────────────┬─────────────────────────────────────┐
/// │ SequenceHeader  │ Field payload                       │
/// │ (20 bytes)      │ (variable length)                   │
/// └─────────────────┴─────────────────────────────────────┘
/// ```
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes)]
pub struct SequenceHeader {
    pub magic: u32,        // 0xFEEDC0DE
    pub version: u8,       // Format version
    pub flags: u8,         // Reserved, always 0
    pub reserved: u16,     // Reserved, always 0
    pub record_count: u32, // Records in the payload
    pub payload_size: u32, // Payload bytes after the header
    pub checksum: u32,     // CRC32 of the whole message minus this field
}

impl SequenceHeader {
    /// Header size in bytes
    pub const SIZE: usize = 20;

    /// Create a header for a payload; the checksum is filled in when the
    /// full message is assembled.
    pub fn new(record_count: u32, payload_size: u32) -> Self {
        Self {
            magic: SEQUENCE_MAGIC,
            version: FORMAT_VERSION,
            flags: 0,
            reserved: 0,
            record_count,
            payload_size,
            checksum: 0,
        }
    }

    /// Calculate and set the checksum for the assembled message
    pub fn calculate_checksum(&mut self, full_message: &[u8]) {
        self.checksum = message_checksum(full_message);
    }

    /// Verify the checksum against the full message
    pub fn verify_checksum(&self, full_message: &[u8]) -> bool {
        message_checksum(full_message) == self.checksum
    }
}

/// CRC32 over the entire message except the checksum field itself.
pub(crate) fn message_checksum(full_message: &[u8]) -> u32 {
    let checksum_offset = SequenceHeader::SIZE - 4;
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&full_message[..checksum_offset]);
    hasher.update(&full_message[SequenceHeader::SIZE..]);
    hasher.finalize()
}

/// Field tags for the per-record payload, in wire order
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum FieldTag {
    Name = 1,
    Age = 2,
    Email = 3,
}

impl FieldTag {
    /// Expected value length for fixed-size fields (None for variable-size)
    pub fn expected_len(&self) -> Option<usize> {
        match self {
            FieldTag::Age => Some(4),
            FieldTag::Name | FieldTag::Email => None,
        }
    }
}
