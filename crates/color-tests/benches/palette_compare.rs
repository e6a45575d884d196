//! Comparison Benchmarks: oxcolor vs palette
//!
//! The same sample set converted to HSL and Lab by each library.

use color_tests::patterns::{SamplePattern, generate_samples};
use color_tests::reference::{hsl_palette, lab_palette};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxcolor_core::color::{D65, rgb_to_hsl, rgb_to_lab};

const SIZES: [usize; 2] = [1024, 16384];

fn bench_hsl(c: &mut Criterion) {
    let mut group = c.benchmark_group("hsl");

    for size in SIZES {
        let samples = generate_samples(SamplePattern::Random(1, size));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("oxcolor", size), &samples, |b, samples| {
            b.iter(|| {
                for &rgb in samples {
                    black_box(rgb_to_hsl(rgb));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("palette", size), &samples, |b, samples| {
            b.iter(|| {
                for &rgb in samples {
                    black_box(hsl_palette(rgb));
                }
            })
        });
    }

    group.finish();
}

fn bench_lab(c: &mut Criterion) {
    let mut group = c.benchmark_group("lab");

    for size in SIZES {
        let samples = generate_samples(SamplePattern::Random(2, size));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("oxcolor", size), &samples, |b, samples| {
            b.iter(|| {
                for &rgb in samples {
                    black_box(rgb_to_lab(rgb, &D65));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("palette", size), &samples, |b, samples| {
            b.iter(|| {
                for &rgb in samples {
                    black_box(lab_palette(rgb));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hsl, bench_lab);
criterion_main!(benches);
