//! Error types for wire format operations.

use std::fmt;

use bytestream::ByteError;

/// Result type for wire format operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// High-level decode errors for wire framing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A primitive read failed while parsing framing.
    Bytestream(ByteError),

    /// A frame had no bytes, so it cannot carry a header word.
    EmptyFrame,

    /// A frame length prefix points past the end of the batch.
    FrameTruncated { needed: usize, available: usize },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific wire limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    BatchBytes,
    PacketsPerBatch,
    PacketBytes,
}

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Packet id does not fit in the 10 header bits.
    PacketIdOutOfRange { packet_id: u32 },
    /// Sub-client id does not fit in its 2 header bits.
    SubClientOutOfRange { sub_client: u8 },
    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

impl From<ByteError> for DecodeError {
    fn from(err: ByteError) -> Self {
        Self::Bytestream(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytestream(err) => write!(f, "bytestream error: {err}"),
            Self::EmptyFrame => write!(f, "empty frame has no header"),
            Self::FrameTruncated { needed, available } => {
                write!(f, "truncated frame: need {needed} bytes, have {available}")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BatchBytes => "batch bytes",
            Self::PacketsPerBatch => "packets per batch",
            Self::PacketBytes => "packet bytes",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PacketIdOutOfRange { packet_id } => {
                write!(f, "packet id {packet_id} does not fit in 10 bits")
            }
            Self::SubClientOutOfRange { sub_client } => {
                write!(f, "sub-client id {sub_client} does not fit in 2 bits")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bytestream(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for EncodeError {}
