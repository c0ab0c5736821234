//! Binary Sequence Decoder
//!
//! Zero-copy header parsing followed by a per-record field walk. Every
//! failure mode surfaces as a [`DecodeError`]; hostile input never panics.

use super::{message_checksum, DecodeError, FieldTag, SequenceHeader};
use crate::record::Record;
use crate::{FORMAT_VERSION, SEQUENCE_MAGIC};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};
use zerocopy::Ref;

// Smallest possible record on the wire: three field headers plus the age.
const MIN_RECORD_WIRE_LEN: usize = 13;

/// Parse and verify the sequence header from the front of `data`.
pub fn parse_sequence_header(data: &[u8]) -> Result<&SequenceHeader, DecodeError> {
    if data.len() < SequenceHeader::SIZE {
        return Err(DecodeError::BufferTooSmall {
            need: SequenceHeader::SIZE,
            got: data.len(),
        });
    }

    let header = Ref::<_, SequenceHeader>::new(&data[..SequenceHeader::SIZE])
        .ok_or(DecodeError::BufferTooSmall {
            need: SequenceHeader::SIZE,
            got: data.len(),
        })?
        .into_ref();

    if header.magic != SEQUENCE_MAGIC {
        return Err(DecodeError::InvalidMagic {
            expected: SEQUENCE_MAGIC,
            actual: header.magic,
        });
    }

    if header.version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion(header.version));
    }

    let expected = header.checksum;
    let calculated = message_checksum(data);
    if calculated != expected {
        return Err(DecodeError::ChecksumMismatch {
            expected,
            calculated,
        });
    }

    Ok(header)
}

/// Decode a buffer produced by [`encode`](super::encode) back into records.
///
/// The decoded sequence equals the encoded one field-for-field, in the same
/// order.
pub fn decode(data: &[u8]) -> Result<Vec<Record>, DecodeError> {
    let header = parse_sequence_header(data)?;
    let record_count = header.record_count as usize;
    let declared = header.payload_size as usize;

    let payload = &data[SequenceHeader::SIZE..];
    if payload.len() != declared {
        return Err(DecodeError::PayloadSizeMismatch {
            declared,
            actual: payload.len(),
        });
    }

    let mut cursor = Cursor::new(payload);
    // record_count is untrusted; clamp the preallocation to what the payload
    // could actually hold.
    let mut records = Vec::with_capacity(record_count.min(declared / MIN_RECORD_WIRE_LEN));
    for _ in 0..record_count {
        let name = read_string_field(&mut cursor, FieldTag::Name)?;
        let age = read_age_field(&mut cursor)?;
        let email = read_string_field(&mut cursor, FieldTag::Email)?;
        records.push(Record { name, age, email });
    }

    let remaining = payload.len() - cursor.position() as usize;
    if remaining != 0 {
        return Err(DecodeError::TrailingBytes { remaining });
    }

    Ok(records)
}

/// Read one field header and verify the tag and any fixed value length.
fn read_field_header(cursor: &mut Cursor<&[u8]>, expected: FieldTag) -> Result<usize, DecodeError> {
    let offset = cursor.position() as usize;
    let tag_byte = cursor
        .read_u8()
        .map_err(|_| DecodeError::TruncatedField { offset })?;
    let tag = FieldTag::try_from(tag_byte).map_err(|_| DecodeError::UnknownTag(tag_byte))?;
    if tag != expected {
        return Err(DecodeError::UnexpectedTag {
            expected,
            actual: tag,
        });
    }

    let len = cursor
        .read_u16::<LittleEndian>()
        .map_err(|_| DecodeError::TruncatedField { offset })? as usize;
    if let Some(fixed) = tag.expected_len() {
        if len != fixed {
            return Err(DecodeError::FieldLengthMismatch {
                tag,
                expected: fixed,
                actual: len,
            });
        }
    }

    Ok(len)
}

fn read_string_field(cursor: &mut Cursor<&[u8]>, expected: FieldTag) -> Result<String, DecodeError> {
    let len = read_field_header(cursor, expected)?;
    let offset = cursor.position() as usize;
    let mut value = vec![0u8; len];
    cursor
        .read_exact(&mut value)
        .map_err(|_| DecodeError::TruncatedField { offset })?;
    String::from_utf8(value).map_err(|_| DecodeError::InvalidUtf8 { tag: expected })
}

fn read_age_field(cursor: &mut Cursor<&[u8]>) -> Result<i32, DecodeError> {
    read_field_header(cursor, FieldTag::Age)?;
    let offset = cursor.position() as usize;
    cursor
        .read_i32::<LittleEndian>()
        .map_err(|_| DecodeError::TruncatedField { offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::encode;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Alice", 30, "alice@mail.com"),
            Record::new("Charlie", 40, "charlie@mail.com"),
        ]
    }

    #[test]
    fn test_round_trip_is_exact() {
        let records = sample();
        let decoded = decode(&encode(&records)).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_round_trip_preserves_commas_in_fields() {
        // The textual rendering would mangle this name; the wire form must not.
        let records = vec![Record::new("Doe, Jane", 33, "jane@mail.com")];
        let decoded = decode(&encode(&records)).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_round_trip_empty_sequence() {
        let decoded = decode(&encode(&[])).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_truncated_buffer_rejected() {
        let message = encode(&sample());
        let result = decode(&message[..SequenceHeader::SIZE - 1]);
        assert!(matches!(
            result,
            Err(DecodeError::BufferTooSmall { need: 20, .. })
        ));
    }

    #[test]
    fn test_wrong_magic_rejected() {
        let mut message = encode(&sample());
        message[0] ^= 0xFF;
        assert!(matches!(
            decode(&message),
            Err(DecodeError::InvalidMagic { .. })
        ));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut message = encode(&sample());
        message[4] = FORMAT_VERSION + 1;
        // Re-seal the checksum so only the version is wrong.
        let checksum = message_checksum(&message);
        let offset = SequenceHeader::SIZE - 4;
        message[offset..SequenceHeader::SIZE].copy_from_slice(&checksum.to_ne_bytes());
        assert!(matches!(
            decode(&message),
            Err(DecodeError::UnsupportedVersion(v)) if v == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn test_corrupted_payload_fails_checksum() {
        let mut message = encode(&sample());
        let last = message.len() - 1;
        message[last] ^= 0xFF;
        assert!(matches!(
            decode(&message),
            Err(DecodeError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_truncated_payload_reports_size_mismatch() {
        let mut message = encode(&sample());
        message.pop();
        // Checksum fires first on a plain truncation; repair it to reach the
        // size check.
        let checksum = message_checksum(&message);
        let offset = SequenceHeader::SIZE - 4;
        message[offset..SequenceHeader::SIZE].copy_from_slice(&checksum.to_ne_bytes());
        assert!(matches!(
            decode(&message),
            Err(DecodeError::PayloadSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_garbage_input_rejected() {
        let garbage = vec![0x5A; 64];
        assert!(decode(&garbage).is_err());
    }

    /// Build a well-formed message around an arbitrary raw payload.
    fn message_with_payload(record_count: u32, payload: &[u8]) -> Vec<u8> {
        use zerocopy::AsBytes;

        let mut header = SequenceHeader::new(record_count, payload.len() as u32);
        let mut message = Vec::with_capacity(SequenceHeader::SIZE + payload.len());
        message.extend_from_slice(header.as_bytes());
        message.extend_from_slice(payload);
        header.calculate_checksum(&message);
        message[..SequenceHeader::SIZE].copy_from_slice(header.as_bytes());
        message
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let message = message_with_payload(0, &[1, 2, 3]);
        assert_eq!(
            decode(&message),
            Err(DecodeError::TrailingBytes { remaining: 3 })
        );
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let message = message_with_payload(1, &[9, 0, 0]);
        assert_eq!(decode(&message), Err(DecodeError::UnknownTag(9)));
    }

    #[test]
    fn test_out_of_order_tag_rejected() {
        // Email tag where the name field belongs.
        let message = message_with_payload(1, &[3, 0, 0]);
        assert_eq!(
            decode(&message),
            Err(DecodeError::UnexpectedTag {
                expected: FieldTag::Name,
                actual: FieldTag::Email,
            })
        );
    }

    #[test]
    fn test_wrong_age_length_rejected() {
        // Empty name, then an age field claiming 2 bytes.
        let message = message_with_payload(1, &[1, 0, 0, 2, 2, 0, 30, 0]);
        assert_eq!(
            decode(&message),
            Err(DecodeError::FieldLengthMismatch {
                tag: FieldTag::Age,
                expected: 4,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        // Name field carrying a lone 0xFF byte.
        let message = message_with_payload(1, &[1, 1, 0, 0xFF]);
        assert_eq!(
            decode(&message),
            Err(DecodeError::InvalidUtf8 {
                tag: FieldTag::Name
            })
        );
    }

    #[test]
    fn test_truncated_field_value_rejected() {
        // Name field claiming 5 bytes with only 1 present.
        let message = message_with_payload(1, &[1, 5, 0, b'a']);
        assert!(matches!(
            decode(&message),
            Err(DecodeError::TruncatedField { .. })
        ));
    }
}
