// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for Melody Cipher
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Encoding throughput for base-8 and base-12 scales
//! - Decoding throughput, clean and with damaged streams
//! - Registry lookup

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use melody_cipher::{decode, encode, Format, Scale, ScalePreset, ScaleRegistry};

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog\n\
Pack my box with five dozen liquor jugs!\n";

fn sample_text(repeats: usize) -> String {
    SAMPLE.repeat(repeats)
}

/// Benchmark encoding across input sizes
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for preset in [ScalePreset::OctatonicHalfWhole, ScalePreset::Duochroma] {
        let scale = Scale::preset(preset);
        for repeats in [1, 100, 1000].iter() {
            let text = sample_text(*repeats);
            group.bench_with_input(
                BenchmarkId::new(preset.name(), repeats),
                &text,
                |b, text| b.iter(|| black_box(encode(black_box(text), &scale, Format::Explicit))),
            );
        }
    }

    group.finish();
}

/// Benchmark decoding of clean and damaged streams
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let scale = Scale::preset(ScalePreset::BebopMixolydian);

    for repeats in [1, 100, 1000].iter() {
        let stream = encode(&sample_text(*repeats), &scale, Format::Explicit);
        group.bench_with_input(BenchmarkId::new("clean", repeats), &stream, |b, stream| {
            b.iter(|| black_box(decode(black_box(stream), &scale)))
        });

        // Drop every seventh token to force resynchronization
        let damaged: String = stream
            .lines()
            .map(|line| {
                line.split(' ')
                    .enumerate()
                    .filter(|(i, _)| i % 7 != 3)
                    .map(|(_, t)| t)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n");
        group.bench_with_input(BenchmarkId::new("damaged", repeats), &damaged, |b, stream| {
            b.iter(|| black_box(decode(black_box(stream), &scale)))
        });
    }

    group.finish();
}

/// Benchmark cipher name resolution
fn bench_registry(c: &mut Criterion) {
    let registry = ScaleRegistry::new();

    c.bench_function("registry_build", |b| b.iter(|| black_box(ScaleRegistry::new())));
    c.bench_function("registry_get", |b| {
        b.iter(|| black_box(registry.get(black_box("diminished_octatonic_whole_half"))))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_registry);
criterion_main!(benches);
