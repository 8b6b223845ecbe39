//! Framing for streams of envelopes, in the shape of Tonic's streaming
//! codec but without compression.
//!
//! Every envelope is sent with a future compatible compression flag (always
//! zero for now) and a big-endian `u32` body size (n). The next n bytes are
//! the envelope's own encoding, as produced by
//! [Envelope::marshal](crate::Envelope::marshal). An empty envelope is a
//! header with n = 0.

mod decoder;
mod encoder;

pub use decoder::Decoder;
pub use encoder::Encoder;
