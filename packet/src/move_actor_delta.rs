//! Sparse entity movement delta.
//!
//! Sent by the server many times per second per moving entity, so every
//! component that did not change is left off the wire. A `u16` presence mask
//! precedes the payload and says which of the six components follow:
//!
//! ```text
//! varuint64  entity runtime id
//! u16 (LE)   flags
//! [varint32] delta x bits       iff HAS_X
//! [varint32] delta y bits       iff HAS_Y
//! [varint32] delta z bits       iff HAS_Z
//! [u8]       rotation x angle   iff HAS_ROT_X
//! [u8]       rotation y angle   iff HAS_ROT_Y
//! [u8]       rotation z angle   iff HAS_ROT_Z
//! ```
//!
//! Position components travel as their raw IEEE 754 bit pattern reinterpreted
//! as `i32`, so they round-trip exactly. Rotation components are quantized to
//! one byte each (see [`quantize_angle`]).

use bytestream::{vari32_len, varu64_len, ByteReader, ByteWriter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::contract::Packet;
use crate::error::PacketResult;
use crate::id::ID_MOVE_ACTOR_DELTA;
use crate::quantize::{dequantize_angle, pack_float_bits, quantize_angle, unpack_float_bits};
use crate::types::{EntityRuntimeId, Vec3};

/// Presence mask for [`MoveActorDelta`] components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveFlags(u16);

impl MoveFlags {
    pub const HAS_X: u16 = 1 << 0;
    pub const HAS_Y: u16 = 1 << 1;
    pub const HAS_Z: u16 = 1 << 2;
    pub const HAS_ROT_X: u16 = 1 << 3;
    pub const HAS_ROT_Y: u16 = 1 << 4;
    pub const HAS_ROT_Z: u16 = 1 << 5;

    /// Position bits in wire order.
    pub const POSITION: [u16; 3] = [Self::HAS_X, Self::HAS_Y, Self::HAS_Z];

    /// Rotation bits in wire order.
    pub const ROTATION: [u16; 3] = [Self::HAS_ROT_X, Self::HAS_ROT_Y, Self::HAS_ROT_Z];

    /// Bits with no assigned meaning. Never set on encode, ignored on decode.
    pub const RESERVED_MASK: u16 = !0b11_1111;

    /// Creates flags from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw flag bits.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns `true` if every bit in `bits` is set.
    #[must_use]
    pub const fn contains(self, bits: u16) -> bool {
        self.0 & bits == bits
    }

    /// Returns `true` if any reserved bit is set.
    #[must_use]
    pub const fn has_reserved(self) -> bool {
        self.0 & Self::RESERVED_MASK != 0
    }

    /// Number of position components present.
    #[must_use]
    pub const fn position_count(self) -> u32 {
        (self.0 & (Self::HAS_X | Self::HAS_Y | Self::HAS_Z)).count_ones()
    }

    /// Number of rotation components present.
    #[must_use]
    pub const fn rotation_count(self) -> u32 {
        (self.0 & (Self::HAS_ROT_X | Self::HAS_ROT_Y | Self::HAS_ROT_Z)).count_ones()
    }

    /// Derives the mask from component values: a bit is set iff its component is non-zero.
    #[must_use]
    pub fn from_components(position: Vec3, rotation: Vec3) -> Self {
        let mut raw = 0u16;
        for (bit, value) in Self::POSITION.into_iter().zip(position.to_array()) {
            if value != 0.0 {
                raw |= bit;
            }
        }
        for (bit, value) in Self::ROTATION.into_iter().zip(rotation.to_array()) {
            if value != 0.0 {
                raw |= bit;
            }
        }
        Self(raw)
    }
}

/// Moves a non-player entity by a position and rotation delta.
///
/// Components equal to `0.0` are not transmitted and decode as `0.0`, so a
/// zero delta and an omitted one are the same thing on the wire. The presence
/// mask is never stored; [`flags`](Self::flags) recomputes it from the fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveActorDelta {
    /// Runtime ID of the entity being moved.
    pub entity_runtime_id: EntityRuntimeId,
    /// Distance moved on each axis since the previous update.
    pub delta_position: Vec3,
    /// Rotation on each axis since the previous update, in degrees.
    pub delta_rotation: Vec3,
}

impl MoveActorDelta {
    #[must_use]
    pub const fn new(
        entity_runtime_id: EntityRuntimeId,
        delta_position: Vec3,
        delta_rotation: Vec3,
    ) -> Self {
        Self {
            entity_runtime_id,
            delta_position,
            delta_rotation,
        }
    }

    /// Returns the presence mask the payload would carry.
    #[must_use]
    pub fn flags(&self) -> MoveFlags {
        MoveFlags::from_components(self.delta_position, self.delta_rotation)
    }

    /// Returns `true` if nothing moved (the minimal frame).
    #[must_use]
    pub fn is_still(&self) -> bool {
        self.delta_position.is_zero() && self.delta_rotation.is_zero()
    }

    /// Returns the value this packet decodes to after a round-trip: rotations
    /// snapped to the byte-angle grid, zero components normalized to `+0.0`.
    #[must_use]
    pub fn quantized(&self) -> Self {
        let position = self
            .delta_position
            .to_array()
            .map(|v| if v == 0.0 { 0.0 } else { v });
        let rotation = self
            .delta_rotation
            .to_array()
            .map(|v| if v == 0.0 { 0.0 } else { dequantize_angle(quantize_angle(v)) });
        Self::new(self.entity_runtime_id, position.into(), rotation.into())
    }
}

impl Packet for MoveActorDelta {
    const ID: u32 = ID_MOVE_ACTOR_DELTA;

    fn encode(&self, writer: &mut ByteWriter) {
        writer.write_varu64(self.entity_runtime_id.raw());
        let flags = self.flags();
        writer.write_u16_le(flags.raw());

        for (bit, value) in MoveFlags::POSITION
            .into_iter()
            .zip(self.delta_position.to_array())
        {
            if flags.contains(bit) {
                writer.write_vari32(pack_float_bits(value));
            }
        }
        for (bit, value) in MoveFlags::ROTATION
            .into_iter()
            .zip(self.delta_rotation.to_array())
        {
            if flags.contains(bit) {
                writer.write_u8(quantize_angle(value));
            }
        }
    }

    fn decode(reader: &mut ByteReader<'_>) -> PacketResult<Self> {
        let entity_runtime_id = EntityRuntimeId::new(reader.read_varu64()?);
        let flags = MoveFlags::from_raw(reader.read_u16_le()?);

        let mut position = [0.0f32; 3];
        for (bit, slot) in MoveFlags::POSITION.into_iter().zip(&mut position) {
            if flags.contains(bit) {
                *slot = unpack_float_bits(reader.read_vari32()?);
            }
        }
        let mut rotation = [0.0f32; 3];
        for (bit, slot) in MoveFlags::ROTATION.into_iter().zip(&mut rotation) {
            if flags.contains(bit) {
                *slot = dequantize_angle(reader.read_u8()?);
            }
        }

        Ok(Self::new(entity_runtime_id, position.into(), rotation.into()))
    }

    fn encoded_len(&self) -> usize {
        let flags = self.flags();
        let position_len: usize = MoveFlags::POSITION
            .into_iter()
            .zip(self.delta_position.to_array())
            .filter(|(bit, _)| flags.contains(*bit))
            .map(|(_, value)| vari32_len(pack_float_bits(value)))
            .sum();
        varu64_len(self.entity_runtime_id.raw()) + 2 + position_len + flags.rotation_count() as usize
    }
}
