#![no_main]

use libfuzzer_sys::fuzz_target;
use mcproto_wire::{Buffer, ProtoRead, ProtoWrite};

fuzz_target!(|data: &[u8]| {
    // First byte picks the width, the rest is the varint stream
    let Some((&width, stream)) = data.split_first() else {
        return;
    };
    let bits = u32::from(width % 128) + 1;

    let mut buf = Buffer::from_bytes(stream);
    if let Ok(value) = buf.read_varuint(bits) {
        assert!(value <= u128::MAX >> (128 - bits));
        // Anything accepted must re-encode within the width
        let mut out = Buffer::new();
        out.write_varuint(value, bits).unwrap();
    }

    let _ = Buffer::from_bytes(stream).read_varint(bits);
});
