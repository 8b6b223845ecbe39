use prost::DecodeError;
use thiserror::Error;
use tonic::Status;

/// Everything that can go wrong encoding, decoding or framing an envelope.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A varint ran past ten bytes.
    #[error("integer overflow")]
    IntegerOverflow,
    /// A length prefix was negative or pointed past `usize::MAX`.
    #[error("negative length found during unmarshaling")]
    InvalidLength,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected end of group")]
    UnexpectedEndOfGroup,
    #[error("{envelope}: illegal tag {tag}")]
    IllegalTag { envelope: &'static str, tag: u64 },
    #[error("illegal wire type {0}")]
    IllegalWireType(u64),
    /// An end-group marker where the envelope itself was expected.
    #[error("{0}: wiretype end group for non-group")]
    EndGroupForNonGroup(&'static str),
    /// A registered field number carrying anything but a length-delimited
    /// payload. Holds the raw wire type, so 6 and 7 are reported here too.
    #[error("wrong wire type {wire_type} for field {field}")]
    WrongWireType { field: &'static str, wire_type: u8 },
    #[error("can't encode value of type {type_name} as message {envelope}")]
    UnsupportedPayloadType {
        envelope: &'static str,
        type_name: &'static str,
    },
    #[error("failed to decode {field}: {source}")]
    Payload {
        field: &'static str,
        #[source]
        source: DecodeError,
    },
    #[error("buffer too small: need {required} bytes, have {remaining}")]
    BufferTooSmall { required: usize, remaining: usize },
    #[error("frame too large: {0} bytes")]
    FrameTooLarge(usize),
    #[error("compression not supported: found {0}")]
    UnsupportedCompression(u8),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CodecError> for Status {
    fn from(error: CodecError) -> Self {
        // Protobuf parse errors map to INTERNAL, as per
        // https://github.com/grpc/grpc/blob/master/doc/statuscodes.md
        Status::internal(error.to_string())
    }
}

impl From<CodecError> for DecodeError {
    fn from(error: CodecError) -> Self {
        match error {
            CodecError::Payload { source, .. } => source,
            other => DecodeError::new(other.to_string()),
        }
    }
}
