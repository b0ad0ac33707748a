//! Error types for byte cursor operations.

use std::fmt;

/// Result type for bytestream operations.
pub type ByteResult<T> = Result<T, ByteError>;

/// Errors that can occur while reading primitives from a byte cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A varint kept its continuation bit set past the maximum encoded length.
    InvalidVarint {
        /// Maximum number of bytes allowed for the varint width.
        max_bytes: usize,
    },
}

impl ByteError {
    /// Returns `true` if the cursor ran out of bytes.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::InvalidVarint { max_bytes } => {
                write!(f, "varint longer than {max_bytes} bytes")
            }
        }
    }
}

impl std::error::Error for ByteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unexpected_eof() {
        let err = ByteError::UnexpectedEof {
            requested: 4,
            available: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("4 bytes"), "should mention requested bytes");
        assert!(msg.contains("1 bytes"), "should mention available bytes");
        assert!(msg.contains("read"), "should mention read operation");
    }

    #[test]
    fn error_display_invalid_varint() {
        let err = ByteError::InvalidVarint { max_bytes: 5 };
        let msg = err.to_string();
        assert!(msg.contains("varint"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn is_eof_only_for_unexpected_eof() {
        assert!(ByteError::UnexpectedEof {
            requested: 1,
            available: 0
        }
        .is_eof());
        assert!(!ByteError::InvalidVarint { max_bytes: 10 }.is_eof());
    }

    #[test]
    fn error_equality() {
        let err1 = ByteError::UnexpectedEof {
            requested: 2,
            available: 1,
        };
        let err2 = ByteError::UnexpectedEof {
            requested: 2,
            available: 1,
        };
        let err3 = ByteError::UnexpectedEof {
            requested: 2,
            available: 0,
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<ByteError>();
    }
}
