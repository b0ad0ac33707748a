//! Field packing helpers: float bit reinterpretation and byte angles.

/// Degrees represented by one step of a byte angle.
pub const ANGLE_STEP: f32 = 360.0 / 256.0;

/// Reinterprets a float's bit pattern as a signed integer for varint packing.
///
/// This is a bijection on 32-bit patterns, so NaN payloads, infinities and
/// signed zeros survive [`unpack_float_bits`] unchanged.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn pack_float_bits(value: f32) -> i32 {
    value.to_bits() as i32
}

/// Inverse of [`pack_float_bits`].
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn unpack_float_bits(bits: i32) -> f32 {
    f32::from_bits(bits as u32)
}

/// Quantizes an angle in degrees to one byte.
///
/// The quotient `degrees / ANGLE_STEP` is truncated toward zero into an `i64`,
/// then wrapped modulo 256, so `360.0` maps to `0` and `-90.0` maps to `192`.
/// The `i64` conversion saturates: NaN maps to `0`, and quotients beyond the
/// `i64` range (including infinities) clamp to `i64::MAX`/`i64::MIN` before
/// wrapping, giving `255` for large positive inputs and `0` for large negative
/// ones.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize_angle(degrees: f32) -> u8 {
    let steps = (degrees / ANGLE_STEP) as i64;
    steps as u8
}

/// Recovers degrees from a byte angle. The result lies in `[0, 255 * ANGLE_STEP]`.
#[must_use]
pub fn dequantize_angle(byte: u8) -> f32 {
    f32::from(byte) * ANGLE_STEP
}
