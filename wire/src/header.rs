//! Packet header word.
//!
//! Every frame starts with a single varuint32 that packs the packet id and the
//! split-screen sub-client routing ids:
//!
//! ```text
//! bits 0..10   packet id
//! bits 10..12  sender sub-client
//! bits 12..14  target sub-client
//! ```

use bytestream::{varu32_len, ByteReader, ByteWriter};

use crate::error::{DecodeError, EncodeError, WireResult};

/// Mask selecting the packet id bits of the header word.
pub const PACKET_ID_MASK: u32 = 0x3FF;

/// Shift of the sender sub-client bits.
pub const SENDER_SUB_CLIENT_SHIFT: u32 = 10;

/// Shift of the target sub-client bits.
pub const TARGET_SUB_CLIENT_SHIFT: u32 = 12;

/// Mask for a sub-client id after shifting.
pub const SUB_CLIENT_MASK: u32 = 0x3;

/// Largest packet id the header word can carry.
pub const MAX_PACKET_ID: u32 = PACKET_ID_MASK;

/// Largest sub-client id the header word can carry.
pub const MAX_SUB_CLIENT: u8 = SUB_CLIENT_MASK as u8;

/// Decoded packet header word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PacketHeader {
    /// Packet identifier (10 bits).
    pub packet_id: u32,
    /// Sub-client that sent the packet (2 bits).
    pub sender_sub_client: u8,
    /// Sub-client the packet is addressed to (2 bits).
    pub target_sub_client: u8,
}

impl PacketHeader {
    /// Creates a header for the primary client (both sub-client ids zero).
    #[must_use]
    pub const fn new(packet_id: u32) -> Self {
        Self {
            packet_id,
            sender_sub_client: 0,
            target_sub_client: 0,
        }
    }

    /// Creates a header with explicit sub-client routing.
    #[must_use]
    pub const fn with_sub_clients(packet_id: u32, sender: u8, target: u8) -> Self {
        Self {
            packet_id,
            sender_sub_client: sender,
            target_sub_client: target,
        }
    }

    /// Packs the header into its raw varuint32 value.
    pub fn to_raw(self) -> Result<u32, EncodeError> {
        if self.packet_id > MAX_PACKET_ID {
            return Err(EncodeError::PacketIdOutOfRange {
                packet_id: self.packet_id,
            });
        }
        for sub_client in [self.sender_sub_client, self.target_sub_client] {
            if sub_client > MAX_SUB_CLIENT {
                return Err(EncodeError::SubClientOutOfRange { sub_client });
            }
        }
        Ok(self.packet_id
            | u32::from(self.sender_sub_client) << SENDER_SUB_CLIENT_SHIFT
            | u32::from(self.target_sub_client) << TARGET_SUB_CLIENT_SHIFT)
    }

    /// Unpacks a raw header value. Bits above the target sub-client are ignored.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            packet_id: raw & PACKET_ID_MASK,
            sender_sub_client: ((raw >> SENDER_SUB_CLIENT_SHIFT) & SUB_CLIENT_MASK) as u8,
            target_sub_client: ((raw >> TARGET_SUB_CLIENT_SHIFT) & SUB_CLIENT_MASK) as u8,
        }
    }

    /// Returns the encoded length of this header in bytes.
    pub fn encoded_len(self) -> Result<usize, EncodeError> {
        self.to_raw().map(varu32_len)
    }
}

/// Writes a header word.
pub fn encode_header(header: PacketHeader, writer: &mut ByteWriter) -> Result<(), EncodeError> {
    let raw = header.to_raw()?;
    writer.write_varu32(raw);
    Ok(())
}

/// Reads a header word from the start of a frame.
pub fn decode_header(reader: &mut ByteReader<'_>) -> WireResult<PacketHeader> {
    if reader.is_empty() {
        return Err(DecodeError::EmptyFrame);
    }
    let raw = reader.read_varu32()?;
    Ok(PacketHeader::from_raw(raw))
}
