#![no_main]

use bytestream::ByteWriter;
use libfuzzer_sys::fuzz_target;
use packet::{decode_batch_packets, decode_packet, encode_packet, GamePacket};

fuzz_target!(|data: &[u8]| {
    let limits = wire::Limits::for_testing();

    if let Ok(decoded) = decode_packet(data, &limits) {
        // Whatever decodes must re-encode and decode to the same packet.
        let mut writer = ByteWriter::new();
        if encode_packet(&decoded.packet, &mut writer).is_ok() {
            let again = decode_packet(writer.as_slice(), &limits)
                .expect("re-encoded packet must decode");
            match (&decoded.packet, &again.packet) {
                (GamePacket::MoveActorDelta(a), GamePacket::MoveActorDelta(b)) => {
                    assert_eq!(a.flags(), b.flags());
                    assert_eq!(a.entity_runtime_id, b.entity_runtime_id);
                }
                (a, b) => assert_eq!(a, b),
            }
        }
    }

    let _ = decode_batch_packets(data, &limits);
});
