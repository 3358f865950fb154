#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use mcproto_wire::VarintFrameCodec;
use tokio_util::codec::Decoder;

fuzz_target!(|data: &[u8]| {
    // Frame splitting - test for panics and unbounded buffering
    let mut codec = VarintFrameCodec::new(21, 1 << 16).expect("21-bit prefix is valid");
    let mut src = BytesMut::from(data);
    while let Ok(Some(frame)) = codec.decode(&mut src) {
        assert!(frame.len() <= codec.max_frame_size());
    }
});
