//! Configurable limits for bounded decoding.

/// Wire-level limits for batch decoding and encoding.
///
/// These limits are enforced before any frame body is handed to a packet
/// codec, so a hostile length prefix cannot make the decoder iterate or
/// allocate unboundedly. Per-packet field limits belong to the packet layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum size of a whole batch in bytes.
    pub max_batch_bytes: usize,

    /// Maximum number of frames in a batch.
    pub max_packets_per_batch: usize,

    /// Maximum size of one frame (header word + payload) in bytes.
    pub max_packet_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Matches the decompressed batch ceiling game servers typically allow.
            max_batch_bytes: 4 * 1024 * 1024,

            // Movement-heavy ticks batch many small deltas together.
            max_packets_per_batch: 812,
            max_packet_bytes: 1024 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_batch_bytes: 4096,
            max_packets_per_batch: 16,
            max_packet_bytes: 512,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_batch_bytes: usize::MAX,
            max_packets_per_batch: usize::MAX,
            max_packet_bytes: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_batch_bytes() {
        let limits = Limits::default();
        assert_eq!(limits.max_batch_bytes, 4 * 1024 * 1024);
    }

    #[test]
    fn default_limits_packets_per_batch() {
        let limits = Limits::default();
        assert_eq!(limits.max_packets_per_batch, 812);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = Limits::for_testing();
        let default_limits = Limits::default();

        assert!(test_limits.max_batch_bytes < default_limits.max_batch_bytes);
        assert!(test_limits.max_packets_per_batch < default_limits.max_packets_per_batch);
        assert!(test_limits.max_packet_bytes < default_limits.max_packet_bytes);
    }

    #[test]
    fn unlimited_limits() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_batch_bytes, usize::MAX);
        assert_eq!(limits.max_packets_per_batch, usize::MAX);
        assert_eq!(limits.max_packet_bytes, usize::MAX);
    }

    #[test]
    fn limits_equality() {
        assert_eq!(Limits::default(), Limits::default());
        assert_ne!(Limits::default(), Limits::for_testing());
    }

    #[test]
    fn limits_const_constructible() {
        const LIMITS: Limits = Limits::for_testing();
        assert_eq!(LIMITS.max_packet_bytes, 512);
    }
}
