//! Fixed-layout screen animation packet.

use bytestream::{ByteReader, ByteWriter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::contract::Packet;
use crate::error::PacketResult;
use crate::id::ID_ON_SCREEN_TEXTURE_ANIMATION;

/// Shows an animation over the player's screen, e.g. when a raid starts or ends.
///
/// Wire layout: one little-endian `i32`, always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OnScreenTextureAnimation {
    /// Animation to play. The packet carries no duration or other parameters.
    pub animation_type: i32,
}

impl OnScreenTextureAnimation {
    /// Size of the payload in bytes.
    pub const ENCODED_LEN: usize = 4;

    #[must_use]
    pub const fn new(animation_type: i32) -> Self {
        Self { animation_type }
    }
}

impl Packet for OnScreenTextureAnimation {
    const ID: u32 = ID_ON_SCREEN_TEXTURE_ANIMATION;

    fn encode(&self, writer: &mut ByteWriter) {
        writer.write_i32_le(self.animation_type);
    }

    fn decode(reader: &mut ByteReader<'_>) -> PacketResult<Self> {
        Ok(Self {
            animation_type: reader.read_i32_le()?,
        })
    }

    fn encoded_len(&self) -> usize {
        Self::ENCODED_LEN
    }
}
