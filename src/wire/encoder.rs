//! Binary Sequence Encoder

use super::{FieldTag, SequenceHeader};
use crate::record::Record;
use zerocopy::AsBytes;

/// Encode a record sequence into a single self-describing byte buffer.
///
/// The output is deterministic for identical input (no padding, no
/// timestamps) and round-trips exactly through [`decode`](super::decode),
/// including field values the CSV rendering cannot represent unambiguously,
/// such as names containing commas.
pub fn encode(records: &[Record]) -> Vec<u8> {
    let mut payload = Vec::new();
    for record in records {
        push_field(&mut payload, FieldTag::Name, record.name.as_bytes());
        push_field(&mut payload, FieldTag::Age, &record.age.to_le_bytes());
        push_field(&mut payload, FieldTag::Email, record.email.as_bytes());
    }

    let mut header = SequenceHeader::new(records.len() as u32, payload.len() as u32);
    let mut message = Vec::with_capacity(SequenceHeader::SIZE + payload.len());
    message.extend_from_slice(header.as_bytes());
    message.extend_from_slice(&payload);

    header.calculate_checksum(&message);
    message[..SequenceHeader::SIZE].copy_from_slice(header.as_bytes());
    message
}

/// Append one tag-length-value field: tag u8, length u16 LE, value bytes.
fn push_field(payload: &mut Vec<u8>, tag: FieldTag, value: &[u8]) {
    debug_assert!(value.len() <= u16::MAX as usize);
    payload.push(tag as u8);
    payload.extend_from_slice(&(value.len() as u16).to_le_bytes());
    payload.extend_from_slice(value);
}
