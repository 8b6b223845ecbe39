//! The tagged-union discipline shared by every envelope.
//!
//! An envelope carries at most one payload out of a closed registry. On the
//! wire the active payload is a single length-delimited field whose number
//! identifies the payload type, so an empty envelope encodes to nothing at
//! all. Field numbers are persisted in state and historical transactions:
//! once published they are never renumbered or reused.

use std::fmt::Debug;

use bytes::{Buf, BufMut};
use prost::{
    encoding::{encode_key, encode_varint, encoded_len_varint, key_len, DecodeContext, WireType},
    DecodeError,
};
use tracing::trace;

use crate::{
    wire::{decode_length, decode_varint, skip_field},
    CodecError,
};

/// One row of a variant registry.
pub struct Registration<V> {
    /// Stable wire identifier.
    pub field: u32,
    /// Field name as declared in the schema.
    pub name: &'static str,
    /// Build the variant from the payload's own encoding.
    pub decode: fn(&[u8]) -> Result<V, DecodeError>,
}

/// The closed set of payloads one envelope can hold.
pub trait Variant: Clone + PartialEq + Debug + Send + Sync + Sized + 'static {
    /// Every registered payload, in field number order.
    const REGISTRY: &'static [Registration<Self>];

    /// Field number the active payload is written under.
    fn field_number(&self) -> u32;
    /// Length of the payload's own encoding.
    fn payload_len(&self) -> usize;
    /// Write the payload's own encoding, without tag or length prefix.
    fn encode_payload<B: BufMut>(&self, buf: &mut B);

    fn registration(field: u32) -> Option<&'static Registration<Self>> {
        Self::REGISTRY.iter().find(|entry| entry.field == field)
    }

    /// Tag, length prefix and payload.
    fn encoded_len(&self) -> usize {
        let len = self.payload_len();
        key_len(self.field_number()) + encoded_len_varint(len as u64) + len
    }

    fn encode<B: BufMut>(&self, buf: &mut B) {
        encode_key(self.field_number(), WireType::LengthDelimited, buf);
        encode_varint(self.payload_len() as u64, buf);
        self.encode_payload(buf);
    }
}

/// A message wrapping exactly one [Variant], or nothing.
pub trait Envelope: Default + Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Fully-qualified protobuf message name.
    const NAME: &'static str;
    type Sum: Variant;

    fn sum(&self) -> Option<&Self::Sum>;
    /// Install `sum`, replacing whatever was there.
    fn set_sum(&mut self, sum: Option<Self::Sum>);
    fn take_sum(&mut self) -> Option<Self::Sum>;

    fn reset(&mut self) {
        *self = Default::default();
    }

    /// Encoded length in bytes.
    fn size(&self) -> usize {
        self.sum().map_or(0, Variant::encoded_len)
    }

    /// Encode into a freshly allocated, exactly sized buffer.
    fn marshal(&self) -> Vec<u8> {
        let mut buf = vec![0; self.size()];
        let written = write_tail(self, &mut buf);
        debug_assert_eq!(written, buf.len());
        buf
    }

    /// Encode into the front of `buf`, returning the number of bytes written.
    fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, CodecError> {
        let size = self.size();
        if buf.len() < size {
            return Err(CodecError::BufferTooSmall {
                required: size,
                remaining: buf.len(),
            });
        }
        Ok(write_tail(self, &mut buf[..size]))
    }

    /// Encode into the tail of `buf`, returning the number of bytes written.
    /// The encoding occupies `buf[buf.len() - n..]`.
    fn marshal_to_sized_buffer(&self, buf: &mut [u8]) -> Result<usize, CodecError> {
        let size = self.size();
        if buf.len() < size {
            return Err(CodecError::BufferTooSmall {
                required: size,
                remaining: buf.len(),
            });
        }
        Ok(write_tail(self, buf))
    }

    /// Append the encoding to a growable buffer.
    fn encode_to<B: BufMut>(&self, buf: &mut B) {
        if let Some(sum) = self.sum() {
            sum.encode(buf);
        }
    }

    fn unmarshal(buf: &[u8]) -> Result<Self, CodecError> {
        let mut envelope = Self::default();
        envelope.merge_from(buf)?;
        Ok(envelope)
    }

    /// Decode `buf` into `self`. Each recognized field replaces the current
    /// variant, so the last one in the stream wins. Unknown fields are
    /// skipped. On error the envelope should be discarded.
    fn merge_from(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        let mut pos = 0;
        while pos < buf.len() {
            let start = pos;
            let key = decode_varint(buf, &mut pos)?;
            if key & 0x7 == WireType::EndGroup as u64 {
                return Err(CodecError::EndGroupForNonGroup(Self::NAME));
            }
            let illegal_tag = || CodecError::IllegalTag {
                envelope: Self::NAME,
                tag: key,
            };
            let field = u32::try_from(key).map_err(|_| illegal_tag())? >> 3;
            if field == 0 {
                return Err(illegal_tag());
            }
            match <Self::Sum as Variant>::registration(field) {
                Some(entry) => {
                    // any wire type other than length-delimited, 6 and 7 included
                    let wire_type = (key & 0x7) as u8;
                    if wire_type != WireType::LengthDelimited as u8 {
                        return Err(CodecError::WrongWireType {
                            field: entry.name,
                            wire_type,
                        });
                    }
                    let payload = decode_length(buf, &mut pos)?;
                    let sum = (entry.decode)(&buf[payload]).map_err(|source| {
                        CodecError::Payload {
                            field: entry.name,
                            source,
                        }
                    })?;
                    self.set_sum(Some(sum));
                }
                None => {
                    pos = skip_field(buf, start)?;
                    trace!("{}: skipped unknown field {}", Self::NAME, field);
                }
            }
        }
        Ok(())
    }
}

/// Write the envelope back-to-front into the end of `buf`, which must hold
/// at least [Envelope::size] bytes. Returns the number of bytes written.
fn write_tail<E: Envelope>(envelope: &E, buf: &mut [u8]) -> usize {
    let sum = match envelope.sum() {
        Some(sum) => sum,
        None => return 0,
    };
    let mut i = buf.len();

    let len = sum.payload_len();
    i -= len;
    sum.encode_payload(&mut &mut buf[i..i + len]);

    let prefix = encoded_len_varint(len as u64);
    i -= prefix;
    encode_varint(len as u64, &mut &mut buf[i..i + prefix]);

    let field = sum.field_number();
    let key = key_len(field);
    i -= key;
    encode_key(field, WireType::LengthDelimited, &mut &mut buf[i..i + key]);

    buf.len() - i
}

/// [prost::Message::merge_field] for envelopes, so they can be decoded by
/// anything that drives a prost message.
pub(crate) fn merge_field<E: Envelope, B: Buf>(
    envelope: &mut E,
    tag: u32,
    wire_type: WireType,
    buf: &mut B,
    ctx: DecodeContext,
) -> Result<(), DecodeError> {
    let entry = match <E::Sum as Variant>::registration(tag) {
        Some(entry) => entry,
        None => return prost::encoding::skip_field(wire_type, tag, buf, ctx),
    };
    prost::encoding::check_wire_type(WireType::LengthDelimited, wire_type)?;
    let len = prost::encoding::decode_varint(buf)?;
    if len > buf.remaining() as u64 {
        return Err(CodecError::UnexpectedEndOfInput.into());
    }
    let payload = buf.copy_to_bytes(len as usize);
    let sum = (entry.decode)(&payload)?;
    envelope.set_sum(Some(sum));
    Ok(())
}
