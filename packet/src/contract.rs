//! The contract every packet type implements.

use bytestream::{ByteReader, ByteWriter};

use crate::error::PacketResult;

/// A packet type with a stable identifier and a payload codec.
///
/// Implementations own only the payload. The header word carrying
/// [`ID`](Self::ID) is written and read by the dispatcher
/// ([`encode_packet`](crate::encode_packet) / [`decode_packet`](crate::decode_packet)).
///
/// # Contract
///
/// - `encode` only appends bytes and is deterministic: equal field values
///   always produce equal bytes.
/// - `decode` consumes exactly the bytes `encode` would have produced, in the
///   same order, and fails on the first primitive read that runs out of input.
pub trait Packet: Sized {
    /// Stable identifier used for routing.
    const ID: u32;

    /// Returns [`Self::ID`].
    fn id(&self) -> u32 {
        Self::ID
    }

    /// Appends the payload to `writer`.
    fn encode(&self, writer: &mut ByteWriter);

    /// Reads a payload from `reader`.
    fn decode(reader: &mut ByteReader<'_>) -> PacketResult<Self>;

    /// Returns the payload length `encode` would produce.
    fn encoded_len(&self) -> usize {
        let mut writer = ByteWriter::new();
        self.encode(&mut writer);
        writer.len()
    }

    /// Encodes the payload into a fresh buffer.
    fn to_payload(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        self.encode(&mut writer);
        writer.finish()
    }
}
