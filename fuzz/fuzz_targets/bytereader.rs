#![no_main]

use bytestream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 8;
        idx += 1;

        let before = reader.position();
        let ok = match op {
            0 => reader.read_u8().is_ok(),
            1 => reader.read_u16_le().is_ok(),
            2 => reader.read_i32_le().is_ok(),
            3 => reader.read_varu32().is_ok(),
            4 => reader.read_varu64().is_ok(),
            5 => reader.read_vari32().is_ok(),
            6 => reader.read_vari64().is_ok(),
            _ => {
                let len = usize::from(data[idx - 1] % 16);
                reader.read_bytes(len).is_ok()
            }
        };
        if !ok {
            assert_eq!(reader.position(), before, "failed read advanced the cursor");
        }
    }
});
