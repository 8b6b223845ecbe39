use std::marker::PhantomData;

use bytes::{BufMut, BytesMut};
use tokio_util::codec;
use tracing::debug;

use crate::{
    constants::{HEADER_SIZE, MAX_FRAME_SIZE},
    CodecError, Envelope,
};

#[derive(Debug, Clone, Default)]
pub struct Encoder<E> {
    _phantom: PhantomData<E>,
}

impl<E: Envelope> Encoder<E> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<E: Envelope> codec::Encoder<E> for Encoder<E> {
    type Error = CodecError;

    fn encode(&mut self, item: E, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let len = item.size();
        if len > MAX_FRAME_SIZE {
            debug!("Refusing to frame {} of {} bytes", E::NAME, len);
            return Err(CodecError::FrameTooLarge(len));
        }
        let body_len = u32::try_from(len).map_err(|_| CodecError::FrameTooLarge(len))?;
        dst.reserve(HEADER_SIZE + len);
        // forward-compatible compression flag
        dst.put_u8(0);
        dst.put_u32(body_len);
        item.encode_to(dst);
        Ok(())
    }
}
