//! Packet contract and sparse delta packet codecs.
//!
//! Each packet type implements [`Packet`]: a stable identifier plus a payload
//! encoder/decoder over [`bytestream`]. [`GamePacket`] dispatches on the
//! identifier carried by the [`wire`] header word, and the batch helpers
//! compose both layers.
//!
//! # Packets
//!
//! - [`MoveActorDelta`] - sparse entity movement. A flags word records which
//!   position and rotation components are present; absent components cost
//!   nothing on the wire. Positions keep their exact float bits, rotations
//!   are quantized to one byte (1.40625 degree steps).
//! - [`OnScreenTextureAnimation`] - a single little-endian `i32`.
//!
//! # Example
//!
//! ```
//! use packet::{decode_packet, encode_packet, EntityRuntimeId, GamePacket, MoveActorDelta, Vec3};
//! use bytestream::ByteWriter;
//! use wire::Limits;
//!
//! let delta = MoveActorDelta::new(EntityRuntimeId::new(1), Vec3::new(1.5, 0.0, 0.0), Vec3::ZERO);
//! let mut writer = ByteWriter::new();
//! encode_packet(&GamePacket::from(delta), &mut writer).unwrap();
//!
//! let decoded = decode_packet(writer.as_slice(), &Limits::default()).unwrap();
//! assert_eq!(decoded.packet, GamePacket::MoveActorDelta(delta));
//! ```
//!
//! # Design Principles
//!
//! - **Deterministic** - Equal field values always encode to equal bytes.
//! - **Exact consumption** - A decoder reads exactly what its encoder wrote.
//! - **Lossy only where documented** - Rotations quantize; nothing else does.

mod contract;
mod error;
mod game_packet;
mod id;
mod move_actor_delta;
mod on_screen_texture_animation;
mod quantize;
mod types;

pub use contract::Packet;
pub use error::{PacketError, PacketResult};
pub use game_packet::{
    decode_batch_packets, decode_packet, decode_wire_frame, encode_batch_packets, encode_packet,
    encode_packet_routed, DecodedPacket, GamePacket, UnknownPacket,
};
pub use id::{ID_MOVE_ACTOR_DELTA, ID_ON_SCREEN_TEXTURE_ANIMATION};
pub use move_actor_delta::{MoveActorDelta, MoveFlags};
pub use on_screen_texture_animation::OnScreenTextureAnimation;
pub use quantize::{
    dequantize_angle, pack_float_bits, quantize_angle, unpack_float_bits, ANGLE_STEP,
};
pub use types::{EntityRuntimeId, Vec3};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = ID_MOVE_ACTOR_DELTA;
        let _ = ID_ON_SCREEN_TEXTURE_ANIMATION;
        let _ = ANGLE_STEP;
        let _ = MoveActorDelta::default();
        let _ = OnScreenTextureAnimation::default();
        let _ = MoveFlags::from_raw(0);
        let _ = EntityRuntimeId::new(0);
        let _ = Vec3::ZERO;

        let _: PacketResult<()> = Ok(());
    }

    #[test]
    fn packet_ids_match_constants() {
        assert_eq!(MoveActorDelta::ID, ID_MOVE_ACTOR_DELTA);
        assert_eq!(OnScreenTextureAnimation::ID, ID_ON_SCREEN_TEXTURE_ANIMATION);
    }
}
