//! Frame headers and batch framing for bedrock packet codecs.
//!
//! This crate handles everything between a raw decompressed batch and a
//! packet payload: splitting the batch into length-prefixed frames and
//! unpacking the header word that carries the packet id. It does not know
//! about packet layouts, only where each payload starts and ends.
//!
//! # Design Principles
//!
//! - **Stable wire format** - Header bit layout and framing never change within a protocol version.
//! - **Bounded decoding** - All length prefixes are validated against [`Limits`] before slicing.
//! - **No domain knowledge** - This crate handles framing, not packet fields.

mod batch;
mod error;
mod header;
mod limits;

pub use batch::{decode_batch, decode_frame, encode_batch, encode_frame, WireFrame};
pub use error::{DecodeError, EncodeError, LimitKind, WireResult};
pub use header::{
    decode_header, encode_header, PacketHeader, MAX_PACKET_ID, MAX_SUB_CLIENT, PACKET_ID_MASK,
    SENDER_SUB_CLIENT_SHIFT, SUB_CLIENT_MASK, TARGET_SUB_CLIENT_SHIFT,
};
pub use limits::Limits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = MAX_PACKET_ID;
        let _ = MAX_SUB_CLIENT;
        let _ = PacketHeader::new(0);
        let _ = Limits::default();

        // Error types
        let _: WireResult<()> = Ok(());
    }

    #[test]
    fn limits_default_is_reasonable() {
        let limits = Limits::default();
        assert!(
            limits.max_packet_bytes >= 1024,
            "should allow at least 1KB packets"
        );
        assert!(
            limits.max_batch_bytes >= limits.max_packet_bytes,
            "a batch must fit at least one packet"
        );
    }

    #[test]
    fn header_bit_layout_is_contiguous() {
        assert_eq!(PACKET_ID_MASK.count_ones(), SENDER_SUB_CLIENT_SHIFT);
        assert_eq!(
            SENDER_SUB_CLIENT_SHIFT + SUB_CLIENT_MASK.count_ones(),
            TARGET_SUB_CLIENT_SHIFT
        );
    }
}
