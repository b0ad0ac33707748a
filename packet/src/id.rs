//! Stable packet identifiers.
//!
//! Identifiers are fixed per protocol version and must never be reused for a
//! different layout.

/// Identifier of [`MoveActorDelta`](crate::MoveActorDelta).
pub const ID_MOVE_ACTOR_DELTA: u32 = 0x6F;

/// Identifier of [`OnScreenTextureAnimation`](crate::OnScreenTextureAnimation).
pub const ID_ON_SCREEN_TEXTURE_ANIMATION: u32 = 0x82;
