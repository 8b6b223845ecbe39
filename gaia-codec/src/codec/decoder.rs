use std::marker::PhantomData;

use bytes::{Buf, BytesMut};
use tokio_util::codec;
use tracing::debug;

use crate::{
    constants::{HEADER_SIZE, MAX_FRAME_SIZE},
    CodecError, Envelope,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum State {
    ReadHeader,
    ReadBody { len: usize },
}

/// Splits a byte stream into length-prefixed frames and unmarshals each body
/// as `E`.
///
/// Errors are terminal. A rejected header has already been consumed and a
/// malformed body has already been split off, so the buffer is no longer
/// aligned on a frame boundary and the stream must be dropped.
/// [`FramedRead`](tokio_util::codec::FramedRead) ends the stream after the
/// first error it yields.
#[derive(Debug)]
pub struct Decoder<E> {
    _phantom: PhantomData<E>,
    state: State,
}

impl<E: Envelope> Default for Decoder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Envelope> Decoder<E> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
            state: State::ReadHeader,
        }
    }
}

impl<E: Envelope> codec::Decoder for Decoder<E> {
    type Error = CodecError;
    type Item = E;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let State::ReadHeader = self.state {
            if src.remaining() < HEADER_SIZE {
                return Ok(None);
            }
            // don't support compression, but keep the flag in place
            match src.get_u8() {
                0 => {}
                v => {
                    debug!("Rejecting {} frame with compression flag {}", E::NAME, v);
                    return Err(CodecError::UnsupportedCompression(v));
                }
            };
            let len = src.get_u32() as usize;
            if len > MAX_FRAME_SIZE {
                debug!("Rejecting {} frame of {} bytes", E::NAME, len);
                return Err(CodecError::FrameTooLarge(len));
            }
            src.reserve(len);
            self.state = State::ReadBody { len };
        }

        if let State::ReadBody { len } = self.state {
            if src.len() < len {
                return Ok(None);
            }
            let body = src.split_to(len);
            self.state = State::ReadHeader;
            E::unmarshal(&body).map(Some)
        } else {
            Ok(None)
        }
    }
}
