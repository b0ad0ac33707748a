//! Batch framing: length-prefixed frames packed back to back.
//!
//! ```text
//! batch := frame*
//! frame := varuint32 len, len bytes (header word + payload)
//! ```

use bytestream::{varu32_len, ByteReader, ByteWriter};
use tracing::trace;

use crate::error::{DecodeError, EncodeError, LimitKind, WireResult};
use crate::header::{decode_header, PacketHeader};
use crate::limits::Limits;

/// A frame inside a batch: the header word and the payload slice after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireFrame<'a> {
    pub header: PacketHeader,
    /// Payload bytes following the header word, owned by the packet codec.
    pub payload: &'a [u8],
    /// Total frame length (header word + payload), excluding the length prefix.
    pub frame_len: usize,
}

/// Splits a single frame (no length prefix) into header and payload.
pub fn decode_frame<'a>(frame: &'a [u8], limits: &Limits) -> WireResult<WireFrame<'a>> {
    if frame.len() > limits.max_packet_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::PacketBytes,
            limit: limits.max_packet_bytes,
            actual: frame.len(),
        });
    }
    let mut reader = ByteReader::new(frame);
    let header = decode_header(&mut reader)?;
    Ok(WireFrame {
        header,
        payload: reader.rest(),
        frame_len: frame.len(),
    })
}

/// Decodes a batch into its frames, enforcing `limits` before slicing.
pub fn decode_batch<'a>(batch: &'a [u8], limits: &Limits) -> WireResult<Vec<WireFrame<'a>>> {
    if batch.len() > limits.max_batch_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::BatchBytes,
            limit: limits.max_batch_bytes,
            actual: batch.len(),
        });
    }

    let mut reader = ByteReader::new(batch);
    let mut frames = Vec::new();

    while !reader.is_empty() {
        if frames.len() >= limits.max_packets_per_batch {
            return Err(DecodeError::LimitsExceeded {
                kind: LimitKind::PacketsPerBatch,
                limit: limits.max_packets_per_batch,
                actual: frames.len() + 1,
            });
        }

        let len = reader.read_varu32()? as usize;
        if len > limits.max_packet_bytes {
            return Err(DecodeError::LimitsExceeded {
                kind: LimitKind::PacketBytes,
                limit: limits.max_packet_bytes,
                actual: len,
            });
        }
        if len > reader.remaining() {
            return Err(DecodeError::FrameTruncated {
                needed: reader.position() + len,
                available: batch.len(),
            });
        }

        let frame = reader.read_bytes(len)?;
        let frame = decode_frame(frame, limits)?;
        trace!(
            packet_id = frame.header.packet_id,
            frame_len = frame.frame_len,
            "split batch frame"
        );
        frames.push(frame);
    }

    Ok(frames)
}

/// Appends one length-prefixed frame (header word + payload) to `writer`.
pub fn encode_frame(
    header: PacketHeader,
    payload: &[u8],
    limits: &Limits,
    writer: &mut ByteWriter,
) -> Result<usize, EncodeError> {
    let frame_len = header.encoded_len()? + payload.len();
    if frame_len > limits.max_packet_bytes {
        return Err(EncodeError::LimitsExceeded {
            kind: LimitKind::PacketBytes,
            limit: limits.max_packet_bytes,
            actual: frame_len,
        });
    }
    let len_u32 = u32::try_from(frame_len).map_err(|_| EncodeError::LimitsExceeded {
        kind: LimitKind::PacketBytes,
        limit: u32::MAX as usize,
        actual: frame_len,
    })?;

    writer.write_varu32(len_u32);
    writer.write_varu32(header.to_raw()?);
    writer.write_bytes(payload);
    Ok(varu32_len(len_u32) + frame_len)
}

/// Encodes a full batch from `(header, payload)` pairs.
pub fn encode_batch<'p, I>(frames: I, limits: &Limits) -> Result<Vec<u8>, EncodeError>
where
    I: IntoIterator<Item = (PacketHeader, &'p [u8])>,
{
    let mut writer = ByteWriter::new();
    let mut count = 0usize;
    for (header, payload) in frames {
        count += 1;
        if count > limits.max_packets_per_batch {
            return Err(EncodeError::LimitsExceeded {
                kind: LimitKind::PacketsPerBatch,
                limit: limits.max_packets_per_batch,
                actual: count,
            });
        }
        encode_frame(header, payload, limits, &mut writer)?;
    }
    if writer.len() > limits.max_batch_bytes {
        return Err(EncodeError::LimitsExceeded {
            kind: LimitKind::BatchBytes,
            limit: limits.max_batch_bytes,
            actual: writer.len(),
        });
    }
    Ok(writer.finish())
}
