#![no_main]

use libfuzzer_sys::fuzz_target;
use mcproto_wire::{Buffer, ProtoRead, ProtoWrite};

fuzz_target!(|data: &[u8]| {
    // String decoders must fail cleanly on arbitrary input
    if let Ok(text) = Buffer::from_bytes(data).read_utf8_string() {
        let mut out = Buffer::new();
        out.write_utf8_string(&text).unwrap();
        assert_eq!(Buffer::from(out.flush().to_vec()).read_utf8_string().unwrap(), text);
    }
    let _ = Buffer::from_bytes(data).read_ascii_string_bounded(256);
    let _ = Buffer::from_bytes(data).read_byte_array();
    let _ = Buffer::from_bytes(data).read_optional(|r| r.read_utf8_string());
});
