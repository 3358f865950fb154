use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use mcproto_wire::{Buffer, ProtoRead, ProtoWrite, VarintFrameCodec};
use tokio_util::codec::{Decoder, Encoder};

#[allow(clippy::unwrap_used)]
fn bench_varint(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint");
    // One value per encoded length, 1..=5 bytes
    let values = [0i32, 300, 70_000, 10_000_000, -1];

    for &value in &values {
        group.bench_function(format!("encode_{value}"), |b| {
            let mut buf = Buffer::with_capacity(8);
            b.iter(|| {
                buf.clear();
                buf.write_varint32(black_box(value)).unwrap();
            })
        });

        let mut encoded = Buffer::new();
        encoded.write_varint32(value).unwrap();
        let bytes = encoded.flush();
        group.bench_function(format!("decode_{value}"), |b| {
            b.iter(|| {
                let mut src: &[u8] = &bytes;
                black_box(src.read_varint32().unwrap());
            })
        });
    }

    group.bench_function("encode_varuint_128", |b| {
        let mut buf = Buffer::with_capacity(32);
        b.iter(|| {
            buf.clear();
            buf.write_varuint(black_box(u128::MAX), 128).unwrap();
        })
    });

    group.finish();
}

#[allow(clippy::unwrap_used)]
fn bench_frame_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_codec");

    for &size in &[16usize, 512, 65536] {
        let payload = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("encode_{size}b"), |b| {
            b.iter_batched(
                || BytesMut::with_capacity(size + 4),
                |mut dst| {
                    let mut codec = VarintFrameCodec::default();
                    codec.encode(&payload[..], &mut dst).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        let mut framed = BytesMut::new();
        VarintFrameCodec::default()
            .encode(&payload[..], &mut framed)
            .unwrap();
        group.bench_function(format!("decode_{size}b"), |b| {
            b.iter_batched(
                || framed.clone(),
                |mut src| {
                    let mut codec = VarintFrameCodec::default();
                    let _ = codec.decode(&mut src).unwrap().unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_varint, bench_frame_codec);
criterion_main!(benches);
