//! Error types for packet encoding/decoding.

use std::fmt;

use bytestream::ByteError;

/// Result type for packet operations.
pub type PacketResult<T> = Result<T, PacketError>;

/// Errors that can occur while decoding packets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PacketError {
    /// The payload ended before a field the packet owns.
    TruncatedInput {
        /// Number of bytes the failing read needed.
        requested: usize,
        /// Number of bytes left in the payload.
        available: usize,
    },

    /// A varint field kept its continuation bit set past its maximum length.
    MalformedVarint { max_bytes: usize },

    /// The packet decoded successfully but left payload bytes unread.
    TrailingBytes { packet_id: u32, remaining: usize },

    /// Frame or batch framing error.
    Wire(wire::DecodeError),
}

impl From<ByteError> for PacketError {
    fn from(err: ByteError) -> Self {
        match err {
            ByteError::UnexpectedEof {
                requested,
                available,
            } => Self::TruncatedInput {
                requested,
                available,
            },
            ByteError::InvalidVarint { max_bytes } => Self::MalformedVarint { max_bytes },
        }
    }
}

impl From<wire::DecodeError> for PacketError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Wire(err)
    }
}

impl fmt::Display for PacketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedInput {
                requested,
                available,
            } => {
                write!(
                    f,
                    "truncated input: need {requested} bytes, have {available}"
                )
            }
            Self::MalformedVarint { max_bytes } => {
                write!(f, "malformed varint: longer than {max_bytes} bytes")
            }
            Self::TrailingBytes {
                packet_id,
                remaining,
            } => {
                write!(f, "packet {packet_id} left {remaining} bytes unread")
            }
            Self::Wire(err) => write!(f, "wire error: {err}"),
        }
    }
}

impl std::error::Error for PacketError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Wire(err) => Some(err),
            _ => None,
        }
    }
}
