//! Slice-based readers for the protobuf wire format.
//!
//! These mirror what `prost::encoding` does over a [Buf](bytes::Buf), but
//! keep the exact failure kind so callers can tell a truncated stream from
//! a corrupt one. Encoding goes straight through `prost::encoding`.

use std::ops::Range;

use prost::encoding::WireType;

use crate::{constants::MAX_VARINT_LEN, CodecError};

/// Read a little-endian base-128 varint starting at `pos`, advancing it.
pub fn decode_varint(buf: &[u8], pos: &mut usize) -> Result<u64, CodecError> {
    let mut value = 0u64;
    for i in 0..MAX_VARINT_LEN {
        let byte = *buf.get(*pos).ok_or(CodecError::UnexpectedEndOfInput)?;
        *pos += 1;
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte < 0x80 {
            return Ok(value);
        }
    }
    Err(CodecError::IntegerOverflow)
}

/// Read a length prefix and return the range of the bytes it covers. `pos`
/// is left just past them.
pub fn decode_length(buf: &[u8], pos: &mut usize) -> Result<Range<usize>, CodecError> {
    let len = decode_varint(buf, pos)?;
    // lengths are signed on the wire
    if i64::try_from(len).is_err() {
        return Err(CodecError::InvalidLength);
    }
    let len = usize::try_from(len).map_err(|_| CodecError::InvalidLength)?;
    let end = pos.checked_add(len).ok_or(CodecError::InvalidLength)?;
    if end > buf.len() {
        return Err(CodecError::UnexpectedEndOfInput);
    }
    let start = *pos;
    *pos = end;
    Ok(start..end)
}

pub fn wire_type(key: u64) -> Result<WireType, CodecError> {
    let value = key & 0x7;
    WireType::try_from(value).map_err(|_| CodecError::IllegalWireType(value))
}

fn advance(buf: &[u8], pos: &mut usize, n: usize) -> Result<(), CodecError> {
    let end = pos.checked_add(n).ok_or(CodecError::InvalidLength)?;
    if end > buf.len() {
        return Err(CodecError::UnexpectedEndOfInput);
    }
    *pos = end;
    Ok(())
}

/// Skip one complete field, key included, that starts at `start`. Returns
/// the position of the next field.
///
/// Groups are skipped whole: a start-group opens a level that has to be
/// closed by a matching end-group before the field is considered done.
pub fn skip_field(buf: &[u8], start: usize) -> Result<usize, CodecError> {
    let mut pos = start;
    let mut depth = 0usize;
    while pos < buf.len() {
        let key = decode_varint(buf, &mut pos)?;
        match wire_type(key)? {
            WireType::Varint => {
                decode_varint(buf, &mut pos)?;
            }
            WireType::SixtyFourBit => advance(buf, &mut pos, 8)?,
            WireType::LengthDelimited => {
                decode_length(buf, &mut pos)?;
            }
            WireType::StartGroup => depth += 1,
            WireType::EndGroup => {
                if depth == 0 {
                    return Err(CodecError::UnexpectedEndOfGroup);
                }
                depth -= 1;
            }
            WireType::ThirtyTwoBit => advance(buf, &mut pos, 4)?,
        }
        if depth == 0 {
            return Ok(pos);
        }
    }
    Err(CodecError::UnexpectedEndOfInput)
}
