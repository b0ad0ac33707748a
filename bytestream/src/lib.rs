//! Byte cursor primitives for bedrock packet codecs.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for the scalar
//! encodings packet payloads are built from: single bytes, little-endian
//! fixed-width integers and floats, LEB128 varints and zig-zag signed varints.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - Every read is bounds-checked and a failed read does not move the cursor.
//! - **No domain knowledge** - This crate knows nothing about packets, ids, or game state.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_varu64(300);
//! writer.write_u16_le(0b10_0001);
//! writer.write_vari32(-1);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_varu64().unwrap(), 300);
//! assert_eq!(reader.read_u16_le().unwrap(), 0b10_0001);
//! assert_eq!(reader.read_vari32().unwrap(), -1);
//! assert!(reader.is_empty());
//! ```

mod error;
mod reader;
mod varint;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use varint::{
    unzigzag32, unzigzag64, vari32_len, vari64_len, varu32_len, varu64_len, zigzag32, zigzag64,
    VARINT32_MAX_BYTES, VARINT64_MAX_BYTES,
};
pub use writer::ByteWriter;
