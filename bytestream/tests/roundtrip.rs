use bytestream::{ByteError, ByteReader, ByteWriter};

#[test]
fn writer_roundtrip_mixed() {
    let mut writer = ByteWriter::new();
    writer.write_varu64(111);
    writer.write_u16_le(0xBEEF);
    writer.write_varu32(300);
    writer.write_vari32(-1);
    writer.write_u8(64);
    let bytes = writer.finish();

    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_varu64().unwrap(), 111);
    assert_eq!(reader.read_u16_le().unwrap(), 0xBEEF);
    assert_eq!(reader.read_varu32().unwrap(), 300);
    assert_eq!(reader.read_vari32().unwrap(), -1);
    assert_eq!(reader.read_u8().unwrap(), 64);
    assert!(reader.is_empty());
}

#[test]
fn every_prefix_of_a_stream_fails_with_eof() {
    let mut writer = ByteWriter::new();
    writer.write_varu64(u64::MAX);
    writer.write_u16_le(0x003F);
    writer.write_vari32(i32::MIN);
    let bytes = writer.finish();

    for cut in 0..bytes.len() {
        let mut reader = ByteReader::new(&bytes[..cut]);
        let result = reader
            .read_varu64()
            .and_then(|_| reader.read_u16_le())
            .and_then(|_| reader.read_vari32());
        assert!(
            matches!(result, Err(ByteError::UnexpectedEof { .. })),
            "prefix of {cut} bytes should be truncated, got {result:?}"
        );
    }
}

#[test]
fn reader_resumes_after_failed_read() {
    let bytes = [0x05, 0x01];
    let mut reader = ByteReader::new(&bytes);
    assert_eq!(reader.read_u8().unwrap(), 0x05);
    assert!(reader.read_u16_le().is_err());
    assert_eq!(reader.remaining(), 1);
    assert_eq!(reader.read_u8().unwrap(), 0x01);
}
