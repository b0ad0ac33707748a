//! Introspection and debugging tools for bedrock packet frames.
//!
//! This crate provides utilities for inspecting and producing encoded packets:
//!
//! - Decode a single frame or a whole batch into a report
//! - Print per-packet sizes, header routing and presence flags
//! - Encode packets from the command line for test fixtures
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

use std::fmt;

use anyhow::{bail, Result};
use bytestream::ByteWriter;
use packet::{decode_wire_frame, DecodedPacket, GamePacket, PacketResult};
use serde::Serialize;
use tracing::debug;
use wire::{Limits, WireFrame};

/// Decoded contents of a frame or batch file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    /// Total input size in bytes.
    pub total_bytes: usize,
    /// `true` if the input was parsed as a length-prefixed batch.
    pub batch: bool,
    /// Packets in wire order.
    pub packets: Vec<PacketReport>,
}

/// One decoded packet and its wire footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketReport {
    pub index: usize,
    pub packet_id: u32,
    pub name: &'static str,
    pub sender_sub_client: u8,
    pub target_sub_client: u8,
    /// Header word plus payload.
    pub frame_len: usize,
    pub payload_len: usize,
    /// Presence mask, for packets that carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u16>,
    pub packet: GamePacket,
}

impl PacketReport {
    fn from_decoded(index: usize, frame: &WireFrame<'_>, decoded: DecodedPacket) -> Self {
        let flags = match &decoded.packet {
            GamePacket::MoveActorDelta(delta) => Some(delta.flags().raw()),
            _ => None,
        };
        Self {
            index,
            packet_id: decoded.header.packet_id,
            name: decoded.packet.name(),
            sender_sub_client: decoded.header.sender_sub_client,
            target_sub_client: decoded.header.target_sub_client,
            frame_len: frame.frame_len,
            payload_len: frame.payload.len(),
            flags,
            packet: decoded.packet,
        }
    }
}

/// Inspects one frame (header word + payload, no length prefix).
pub fn inspect_frame(bytes: &[u8], limits: &Limits) -> PacketResult<InspectReport> {
    let frame = wire::decode_frame(bytes, limits)?;
    let decoded = decode_wire_frame(&frame)?;
    Ok(InspectReport {
        total_bytes: bytes.len(),
        batch: false,
        packets: vec![PacketReport::from_decoded(0, &frame, decoded)],
    })
}

/// Inspects a batch of length-prefixed frames.
pub fn inspect_batch(bytes: &[u8], limits: &Limits) -> PacketResult<InspectReport> {
    let frames = wire::decode_batch(bytes, limits)?;
    let mut packets = Vec::with_capacity(frames.len());
    for (index, frame) in frames.iter().enumerate() {
        let decoded = decode_wire_frame(frame)?;
        packets.push(PacketReport::from_decoded(index, frame, decoded));
    }
    debug!(packets = packets.len(), bytes = bytes.len(), "inspected batch");
    Ok(InspectReport {
        total_bytes: bytes.len(),
        batch: true,
        packets,
    })
}

/// Encodes packets either as one bare frame or as a batch.
///
/// A bare frame has no length prefix, so it must hold exactly one packet;
/// pass `batch = true` for anything else.
pub fn encode_packets(packets: &[GamePacket], batch: bool, limits: &Limits) -> Result<Vec<u8>> {
    if batch {
        return Ok(packet::encode_batch_packets(packets, limits)?);
    }
    let [single] = packets else {
        bail!(
            "a bare frame holds exactly one packet, got {}; encode as a batch instead",
            packets.len()
        );
    };
    let mut writer = ByteWriter::new();
    packet::encode_packet(single, &mut writer)?;
    Ok(writer.finish())
}

/// Renders a report for terminals.
pub fn format_report_pretty(report: &InspectReport) -> String {
    report.to_string()
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self)
    }
}

/// Writes the terminal rendering of `report` to `out`.
pub fn write_report(out: &mut impl fmt::Write, report: &InspectReport) -> fmt::Result {
    let kind = if report.batch { "batch" } else { "frame" };
    writeln!(
        out,
        "{kind}: {} bytes, {} packet(s)",
        report.total_bytes,
        report.packets.len()
    )?;
    for entry in &report.packets {
        writeln!(
            out,
            "[{}] {} (id {}) sender={} target={} frame={}B payload={}B",
            entry.index,
            entry.name,
            entry.packet_id,
            entry.sender_sub_client,
            entry.target_sub_client,
            entry.frame_len,
            entry.payload_len
        )?;
        write_fields(out, &entry.packet)?;
    }
    Ok(())
}

fn write_fields(out: &mut impl fmt::Write, packet: &GamePacket) -> fmt::Result {
    match packet {
        GamePacket::MoveActorDelta(delta) => {
            let flags = delta.flags();
            let p = delta.delta_position;
            let r = delta.delta_rotation;
            writeln!(
                out,
                "    flags: 0b{:06b} ({} position, {} rotation{})",
                flags.raw(),
                flags.position_count(),
                flags.rotation_count(),
                if delta.is_still() { ", still" } else { "" }
            )?;
            writeln!(out, "    entity: {}", delta.entity_runtime_id.raw())?;
            writeln!(out, "    position: ({}, {}, {})", p.x, p.y, p.z)?;
            writeln!(out, "    rotation: ({}, {}, {})", r.x, r.y, r.z)
        }
        GamePacket::OnScreenTextureAnimation(anim) => {
            writeln!(out, "    animation_type: {}", anim.animation_type)
        }
        GamePacket::Unknown(unknown) => {
            write!(out, "    payload: [")?;
            for (idx, byte) in unknown.payload.iter().enumerate() {
                let sep = if idx == 0 { "" } else { " " };
                write!(out, "{sep}{byte:02x}")?;
            }
            writeln!(out, "]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packet::{EntityRuntimeId, MoveActorDelta, OnScreenTextureAnimation, PacketError, Vec3};

    fn walk() -> GamePacket {
        MoveActorDelta::new(EntityRuntimeId::new(1), Vec3::new(1.5, 0.0, 0.0), Vec3::ZERO).into()
    }

    #[test]
    fn inspect_single_frame() {
        let bytes = encode_packets(&[walk()], false, &Limits::default()).unwrap();
        let report = inspect_frame(&bytes, &Limits::default()).unwrap();
        assert!(!report.batch);
        assert_eq!(report.total_bytes, 9);
        let entry = &report.packets[0];
        assert_eq!(entry.packet_id, 111);
        assert_eq!(entry.name, "MoveActorDelta");
        assert_eq!(entry.frame_len, 9);
        assert_eq!(entry.payload_len, 8);
        assert_eq!(entry.flags, Some(1));
    }

    #[test]
    fn inspect_batch_keeps_order() {
        let packets = vec![walk(), OnScreenTextureAnimation::new(-7).into()];
        let bytes = encode_packets(&packets, true, &Limits::default()).unwrap();
        let report = inspect_batch(&bytes, &Limits::default()).unwrap();
        assert!(report.batch);
        let names: Vec<_> = report.packets.iter().map(|p| p.name).collect();
        assert_eq!(names, ["MoveActorDelta", "OnScreenTextureAnimation"]);
        assert_eq!(report.packets[1].flags, None);
        assert_eq!(report.packets[1].payload_len, 4);
    }

    #[test]
    fn inspect_frame_reports_decode_errors() {
        let err = inspect_frame(&[0x6F, 0x01], &Limits::default()).unwrap_err();
        assert!(matches!(err, PacketError::TruncatedInput { .. }));
    }

    #[test]
    fn pretty_output_lists_fields() {
        let bytes = encode_packets(&[walk()], false, &Limits::default()).unwrap();
        let report = inspect_frame(&bytes, &Limits::default()).unwrap();
        let text = format_report_pretty(&report);
        assert!(text.starts_with("frame: 9 bytes, 1 packet(s)"));
        assert!(text.contains("MoveActorDelta (id 111)"));
        assert!(text.contains("flags: 0b000001 (1 position, 0 rotation)"));
        assert!(text.contains("position: (1.5, 0, 0)"));
    }

    #[test]
    fn pretty_output_shows_unknown_payload() {
        let report = inspect_frame(&[0x05, 0xAB, 0x01], &Limits::default()).unwrap();
        let text = format_report_pretty(&report);
        assert!(text.contains("Unknown (id 5)"));
        assert!(text.contains("payload: [ab 01]"));
    }

    #[test]
    fn report_serializes_to_json() {
        let packets: Vec<GamePacket> = vec![OnScreenTextureAnimation::new(3).into()];
        let bytes = encode_packets(&packets, false, &Limits::default()).unwrap();
        let report = inspect_frame(&bytes, &Limits::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["packets"][0]["packet_id"], 130);
        assert_eq!(json["packets"][0]["packet"]["type"], "OnScreenTextureAnimation");
        assert_eq!(json["packets"][0]["packet"]["animation_type"], 3);
        assert!(json["packets"][0].get("flags").is_none());
    }

    #[test]
    fn bare_frame_rejects_more_than_one_packet() {
        let packets: Vec<GamePacket> = vec![
            OnScreenTextureAnimation::new(1).into(),
            OnScreenTextureAnimation::new(2).into(),
        ];
        let err = encode_packets(&packets, false, &Limits::default()).unwrap_err();
        assert!(err.to_string().contains("exactly one packet"), "{err}");

        let bytes = encode_packets(&packets, true, &Limits::default()).unwrap();
        let report = inspect_batch(&bytes, &Limits::default()).unwrap();
        assert_eq!(report.packets.len(), 2);
    }

    #[test]
    fn bare_frame_rejects_empty_input() {
        assert!(encode_packets(&[], false, &Limits::default()).is_err());
        assert!(encode_packets(&[], true, &Limits::default()).unwrap().is_empty());
    }

    #[test]
    fn pretty_output_marks_still_entities() {
        let still: GamePacket = MoveActorDelta::default().into();
        let bytes = encode_packets(&[still], false, &Limits::default()).unwrap();
        let report = inspect_frame(&bytes, &Limits::default()).unwrap();
        let text = format_report_pretty(&report);
        assert!(text.contains("flags: 0b000000 (0 position, 0 rotation, still)"), "{text}");
    }

    #[test]
    fn write_report_propagates_writer_errors() {
        struct Full;
        impl fmt::Write for Full {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }
        let bytes = encode_packets(&[walk()], false, &Limits::default()).unwrap();
        let report = inspect_frame(&bytes, &Limits::default()).unwrap();
        assert!(write_report(&mut Full, &report).is_err());
    }
}
