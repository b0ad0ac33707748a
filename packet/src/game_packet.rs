//! Closed dispatch over every packet kind this crate knows.

use bytestream::{ByteReader, ByteWriter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use wire::{EncodeError, Limits, PacketHeader, WireFrame};

use crate::contract::Packet;
use crate::error::{PacketError, PacketResult};
use crate::id::{ID_MOVE_ACTOR_DELTA, ID_ON_SCREEN_TEXTURE_ANIMATION};
use crate::move_actor_delta::MoveActorDelta;
use crate::on_screen_texture_animation::OnScreenTextureAnimation;

/// A packet whose identifier has no codec here. The payload is kept verbatim
/// so the frame can be forwarded or re-encoded unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnknownPacket {
    pub packet_id: u32,
    pub payload: Vec<u8>,
}

/// Every packet kind, resolved by identifier with a `match`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(tag = "type"))]
pub enum GamePacket {
    MoveActorDelta(MoveActorDelta),
    OnScreenTextureAnimation(OnScreenTextureAnimation),
    Unknown(UnknownPacket),
}

impl GamePacket {
    /// Returns the identifier the header word carries for this packet.
    #[must_use]
    pub const fn id(&self) -> u32 {
        match self {
            Self::MoveActorDelta(_) => MoveActorDelta::ID,
            Self::OnScreenTextureAnimation(_) => OnScreenTextureAnimation::ID,
            Self::Unknown(packet) => packet.packet_id,
        }
    }

    /// Human-readable packet name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MoveActorDelta(_) => "MoveActorDelta",
            Self::OnScreenTextureAnimation(_) => "OnScreenTextureAnimation",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Returns `true` if `id` has a codec in this crate.
    #[must_use]
    pub const fn is_known_id(id: u32) -> bool {
        matches!(id, ID_MOVE_ACTOR_DELTA | ID_ON_SCREEN_TEXTURE_ANIMATION)
    }

    /// Appends the payload (without header word).
    pub fn encode_payload(&self, writer: &mut ByteWriter) {
        match self {
            Self::MoveActorDelta(packet) => packet.encode(writer),
            Self::OnScreenTextureAnimation(packet) => packet.encode(writer),
            Self::Unknown(packet) => writer.write_bytes(&packet.payload),
        }
    }

    /// Decodes the payload for `id`. Unknown identifiers capture the rest of
    /// the reader as an [`UnknownPacket`].
    pub fn decode_payload(id: u32, reader: &mut ByteReader<'_>) -> PacketResult<Self> {
        match id {
            ID_MOVE_ACTOR_DELTA => MoveActorDelta::decode(reader).map(Self::MoveActorDelta),
            ID_ON_SCREEN_TEXTURE_ANIMATION => {
                OnScreenTextureAnimation::decode(reader).map(Self::OnScreenTextureAnimation)
            }
            _ => {
                debug!(packet_id = id, len = reader.remaining(), "no codec for packet id");
                let payload = reader.read_bytes(reader.remaining())?.to_vec();
                Ok(Self::Unknown(UnknownPacket {
                    packet_id: id,
                    payload,
                }))
            }
        }
    }
}

impl From<MoveActorDelta> for GamePacket {
    fn from(packet: MoveActorDelta) -> Self {
        Self::MoveActorDelta(packet)
    }
}

impl From<OnScreenTextureAnimation> for GamePacket {
    fn from(packet: OnScreenTextureAnimation) -> Self {
        Self::OnScreenTextureAnimation(packet)
    }
}

/// A packet together with the header word it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPacket {
    pub header: PacketHeader,
    pub packet: GamePacket,
}

/// Writes the header word for the primary client, then the payload.
pub fn encode_packet(packet: &GamePacket, writer: &mut ByteWriter) -> Result<(), EncodeError> {
    encode_packet_routed(packet, 0, 0, writer)
}

/// Writes the header word with sub-client routing, then the payload.
pub fn encode_packet_routed(
    packet: &GamePacket,
    sender_sub_client: u8,
    target_sub_client: u8,
    writer: &mut ByteWriter,
) -> Result<(), EncodeError> {
    let header = PacketHeader::with_sub_clients(packet.id(), sender_sub_client, target_sub_client);
    wire::encode_header(header, writer)?;
    packet.encode_payload(writer);
    Ok(())
}

/// Decodes one frame (header word + payload, no length prefix).
///
/// The payload must be consumed exactly; leftover bytes mean the stream and
/// the codec disagree about the layout and are reported as
/// [`PacketError::TrailingBytes`].
pub fn decode_packet(frame: &[u8], limits: &Limits) -> PacketResult<DecodedPacket> {
    let frame = wire::decode_frame(frame, limits)?;
    decode_wire_frame(&frame)
}

/// Decodes the payload of an already split frame.
pub fn decode_wire_frame(frame: &WireFrame<'_>) -> PacketResult<DecodedPacket> {
    let mut reader = ByteReader::new(frame.payload);
    let packet = GamePacket::decode_payload(frame.header.packet_id, &mut reader)?;
    if !reader.is_empty() {
        debug!(
            packet_id = frame.header.packet_id,
            remaining = reader.remaining(),
            "packet left payload bytes unread"
        );
        return Err(PacketError::TrailingBytes {
            packet_id: frame.header.packet_id,
            remaining: reader.remaining(),
        });
    }
    trace!(
        packet_id = frame.header.packet_id,
        name = packet.name(),
        len = frame.payload.len(),
        "decoded packet"
    );
    Ok(DecodedPacket {
        header: frame.header,
        packet,
    })
}

/// Encodes packets for the primary client into one batch.
pub fn encode_batch_packets(packets: &[GamePacket], limits: &Limits) -> Result<Vec<u8>, EncodeError> {
    let payloads: Vec<(PacketHeader, Vec<u8>)> = packets
        .iter()
        .map(|packet| {
            let mut writer = ByteWriter::new();
            packet.encode_payload(&mut writer);
            (PacketHeader::new(packet.id()), writer.finish())
        })
        .collect();
    wire::encode_batch(
        payloads
            .iter()
            .map(|(header, payload)| (*header, payload.as_slice())),
        limits,
    )
}

/// Splits a batch and decodes every frame in order. Fails on the first bad frame.
pub fn decode_batch_packets(batch: &[u8], limits: &Limits) -> PacketResult<Vec<DecodedPacket>> {
    wire::decode_batch(batch, limits)?
        .iter()
        .map(decode_wire_frame)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntityRuntimeId, Vec3};

    fn sample_delta() -> MoveActorDelta {
        MoveActorDelta::new(
            EntityRuntimeId::new(1),
            Vec3::new(1.5, 0.0, 0.0),
            Vec3::ZERO,
        )
    }

    #[test]
    fn ids_follow_variants() {
        assert_eq!(GamePacket::from(sample_delta()).id(), 111);
        assert_eq!(
            GamePacket::from(OnScreenTextureAnimation::new(3)).id(),
            130
        );
        assert!(GamePacket::is_known_id(111));
        assert!(!GamePacket::is_known_id(1));
    }

    #[test]
    fn encode_packet_writes_header_then_payload() {
        let mut writer = ByteWriter::new();
        encode_packet(&sample_delta().into(), &mut writer).unwrap();
        assert_eq!(
            writer.as_slice(),
            &[0x6F, 0x01, 0x01, 0x00, 0x80, 0x80, 0x80, 0xFC, 0x07]
        );
    }

    #[test]
    fn decode_packet_dispatches_by_id() {
        let frame = [0x82, 0x01, 0xF9, 0xFF, 0xFF, 0xFF];
        let decoded = decode_packet(&frame, &Limits::for_testing()).unwrap();
        assert_eq!(decoded.header, PacketHeader::new(130));
        assert_eq!(
            decoded.packet,
            GamePacket::OnScreenTextureAnimation(OnScreenTextureAnimation::new(-7))
        );
    }

    #[test]
    fn routed_header_roundtrip() {
        let packet = GamePacket::from(OnScreenTextureAnimation::new(5));
        let mut writer = ByteWriter::new();
        encode_packet_routed(&packet, 2, 1, &mut writer).unwrap();
        let decoded = decode_packet(writer.as_slice(), &Limits::for_testing()).unwrap();
        assert_eq!(decoded.header, PacketHeader::with_sub_clients(130, 2, 1));
        assert_eq!(decoded.packet, packet);
    }

    #[test]
    fn routed_header_rejects_wide_sub_client() {
        let mut writer = ByteWriter::new();
        let err = encode_packet_routed(&sample_delta().into(), 4, 0, &mut writer).unwrap_err();
        assert_eq!(err, EncodeError::SubClientOutOfRange { sub_client: 4 });
        assert!(writer.is_empty());
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let frame = [0x82, 0x01, 0xF9, 0xFF, 0xFF, 0xFF, 0x00];
        let err = decode_packet(&frame, &Limits::for_testing()).unwrap_err();
        assert_eq!(
            err,
            PacketError::TrailingBytes {
                packet_id: 130,
                remaining: 1
            }
        );
    }

    #[test]
    fn unknown_id_keeps_payload() {
        let frame = [0x05, 0xAA, 0xBB];
        let decoded = decode_packet(&frame, &Limits::for_testing()).unwrap();
        assert_eq!(
            decoded.packet,
            GamePacket::Unknown(UnknownPacket {
                packet_id: 5,
                payload: vec![0xAA, 0xBB],
            })
        );

        let mut writer = ByteWriter::new();
        encode_packet(&decoded.packet, &mut writer).unwrap();
        assert_eq!(writer.as_slice(), &frame);
    }

    #[test]
    fn truncated_payload_surfaces_truncated_input() {
        let frame = [0x6F, 0x01, 0x01];
        let err = decode_packet(&frame, &Limits::for_testing()).unwrap_err();
        assert!(matches!(err, PacketError::TruncatedInput { .. }));
    }

    #[test]
    fn empty_frame_is_wire_error() {
        let err = decode_packet(&[], &Limits::for_testing()).unwrap_err();
        assert_eq!(err, PacketError::Wire(wire::DecodeError::EmptyFrame));
    }

    #[test]
    fn batch_roundtrip_preserves_order() {
        let packets = vec![
            GamePacket::from(sample_delta()),
            GamePacket::from(OnScreenTextureAnimation::new(-7)),
            GamePacket::from(MoveActorDelta::default()),
        ];
        let limits = Limits::for_testing();
        let batch = encode_batch_packets(&packets, &limits).unwrap();
        let decoded = decode_batch_packets(&batch, &limits).unwrap();
        let decoded: Vec<GamePacket> = decoded.into_iter().map(|d| d.packet).collect();
        assert_eq!(decoded, packets);
    }

    #[test]
    fn batch_stops_at_first_bad_frame() {
        // Second frame claims MoveActorDelta with HAS_X but carries no x bits.
        let batch = [0x04, 0x6F, 0x00, 0x00, 0x00, 0x04, 0x6F, 0x01, 0x01, 0x00];
        let err = decode_batch_packets(&batch, &Limits::for_testing()).unwrap_err();
        assert!(matches!(err, PacketError::TruncatedInput { .. }));
    }
}
