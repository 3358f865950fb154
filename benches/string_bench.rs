use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use mcproto_wire::{Buffer, ProtoRead, ProtoWrite};

#[allow(clippy::unwrap_used)]
fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    for &len in &[16usize, 256, 4096] {
        let utf8: String = "ab\u{e9}\u{1F600}".chars().cycle().take(len).collect();
        let latin1: String = "abc\u{e9}".chars().cycle().take(len).collect();
        group.throughput(Throughput::Bytes(utf8.len() as u64));

        group.bench_function(format!("utf8_write_{len}"), |b| {
            b.iter_batched(
                || Buffer::with_capacity(utf8.len() + 3),
                |mut buf| buf.write_utf8_string(&utf8).unwrap(),
                BatchSize::SmallInput,
            )
        });

        let mut encoded = Buffer::new();
        encoded.write_utf8_string(&utf8).unwrap();
        let bytes = encoded.flush();
        group.bench_function(format!("utf8_read_{len}"), |b| {
            b.iter(|| {
                let mut src: &[u8] = &bytes;
                let _ = src.read_utf8_string().unwrap();
            })
        });

        let mut encoded = Buffer::new();
        encoded.write_ascii_string(&latin1).unwrap();
        let bytes = encoded.flush();
        group.bench_function(format!("ascii_read_{len}"), |b| {
            b.iter(|| {
                let mut src: &[u8] = &bytes;
                let _ = src.read_ascii_string().unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strings);
criterion_main!(benches);
