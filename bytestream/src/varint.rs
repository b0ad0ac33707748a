//! Varint sizing and zig-zag helpers.

/// Maximum encoded length of a 32-bit varint.
pub const VARINT32_MAX_BYTES: usize = 5;

/// Maximum encoded length of a 64-bit varint.
pub const VARINT64_MAX_BYTES: usize = 10;

/// Returns the number of bytes `value` occupies as a varuint32.
#[must_use]
pub const fn varu32_len(value: u32) -> usize {
    varu64_len(value as u64)
}

/// Returns the number of bytes `value` occupies as a varuint64.
#[must_use]
pub const fn varu64_len(mut value: u64) -> usize {
    let mut len = 1;
    while value >= 0x80 {
        value >>= 7;
        len += 1;
    }
    len
}

/// Returns the number of bytes `value` occupies as a zig-zag varint32.
#[must_use]
pub const fn vari32_len(value: i32) -> usize {
    varu32_len(zigzag32(value))
}

/// Returns the number of bytes `value` occupies as a zig-zag varint64.
#[must_use]
pub const fn vari64_len(value: i64) -> usize {
    varu64_len(zigzag64(value))
}

/// Maps a signed 32-bit value onto the unsigned range so small magnitudes stay small.
#[must_use]
pub const fn zigzag32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`zigzag32`].
#[must_use]
pub const fn unzigzag32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Maps a signed 64-bit value onto the unsigned range so small magnitudes stay small.
#[must_use]
pub const fn zigzag64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag64`].
#[must_use]
pub const fn unzigzag64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
