//! Benchmarks for compression and decompression.
//!
//! Run with: `cargo bench --bench codec`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lzw_codec::{LzwDecoder, LzwEncoder};

/// Input shapes for benchmarking
struct Sample {
    name: &'static str,
    data: Vec<u8>,
}

fn samples() -> Vec<Sample> {
    let text: Vec<u8> = b"It was the best of times, it was the worst of times, "
        .iter()
        .copied()
        .cycle()
        .take(256 * 1024)
        .collect();

    let mut state = 0x2545_F491_4F6C_DD1Du64;
    let noise: Vec<u8> = (0..256 * 1024)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 32) as u8
        })
        .collect();

    let runs: Vec<u8> = (0..256 * 1024).map(|i| (i / 1000) as u8).collect();

    vec![
        Sample { name: "text", data: text },
        Sample { name: "noise", data: noise },
        Sample { name: "runs", data: runs },
    ]
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    for sample in samples() {
        group.throughput(Throughput::Bytes(sample.data.len() as u64));
        for max_bits in [9u8, 12, 16] {
            let encoder = LzwEncoder::with_max_bits(max_bits).unwrap();
            group.bench_with_input(
                BenchmarkId::new(sample.name, max_bits),
                &sample.data,
                |b, data| b.iter(|| encoder.encode(black_box(data))),
            );
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    for sample in samples() {
        group.throughput(Throughput::Bytes(sample.data.len() as u64));
        for max_bits in [9u8, 12, 16] {
            let encoder = LzwEncoder::with_max_bits(max_bits).unwrap();
            let decoder = LzwDecoder::with_max_bits(max_bits).unwrap();
            let packed = encoder.encode(&sample.data);
            group.bench_with_input(
                BenchmarkId::new(sample.name, max_bits),
                &packed,
                |b, packed| b.iter(|| decoder.decode(black_box(packed)).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
