// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::cast_precision_loss)] // Bench data generation
#![allow(clippy::cast_possible_truncation)] // Bench parameters
#![allow(clippy::unreadable_literal)] // Large bench constants
#![allow(clippy::semicolon_if_nothing_returned)] // Benchmark code formatting

//! Cursor throughput benchmarks.
//!
//! Measures:
//! - primitive write/read over a fixed slice view
//! - packed record batches (`write_many` / `read_many`)
//! - prefixed string framing for each prefix width
//! - checked vs unchecked reads on the same payload

use bytecursor::prelude::*;
use bytemuck::{Pod, Zeroable};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box as bb;

/// 22-byte packed sample, close to a typical telemetry row.
#[repr(C, packed)]
#[derive(Clone, Copy, Zeroable, Pod)]
struct BenchSample {
    sensor_id: u16,
    timestamp: u64,
    value: f64,
    quality: u32,
}

fn samples(count: usize) -> Vec<BenchSample> {
    (0..count)
        .map(|i| BenchSample {
            sensor_id: i as u16,
            timestamp: 1_700_000_000 + i as u64,
            value: 20.0 + i as f64 * 0.25,
            quality: i as u32,
        })
        .collect()
}

// ============================================================================
// Primitives
// ============================================================================

fn bench_primitives(c: &mut Criterion) {
    let mut buf = vec![0u8; 1000 * 14];

    let mut group = c.benchmark_group("primitive");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("write_u16_u32_f64_x1000", |b| {
        b.iter(|| {
            let mut writer: &mut [u8] = bb(&mut buf[..]);
            for i in 0..1000u32 {
                writer.write_u16(i as u16);
                writer.write_u32(i);
                writer.write_f64(f64::from(i));
            }
            bb(writer.remaining_len());
        })
    });

    group.bench_function("read_u16_u32_f64_x1000", |b| {
        b.iter(|| {
            let mut reader: &[u8] = bb(&buf[..]);
            let mut acc = 0f64;
            for _ in 0..1000 {
                acc += f64::from(reader.read_u16());
                acc += f64::from(reader.read_u32());
                acc += reader.read_f64();
            }
            bb(acc);
        })
    });

    group.bench_function("try_read_u16_u32_f64_x1000", |b| {
        b.iter(|| {
            let mut reader: &[u8] = bb(&buf[..]);
            let mut acc = 0f64;
            while let (Ok(x), Ok(y), Ok(z)) = (
                reader.try_read_u16(),
                reader.try_read_u32(),
                reader.try_read_f64(),
            ) {
                acc += f64::from(x) + f64::from(y) + z;
            }
            bb(acc);
        })
    });
    group.finish();
}

// ============================================================================
// Records
// ============================================================================

fn bench_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");

    for count in [16usize, 256, 4096] {
        let source = samples(count);
        let mut buf = vec![0u8; count * core::mem::size_of::<BenchSample>()];
        group.throughput(Throughput::Bytes(buf.len() as u64));

        group.bench_with_input(BenchmarkId::new("write_many", count), &count, |b, _| {
            b.iter(|| {
                let mut writer: &mut [u8] = bb(&mut buf[..]);
                writer.write_many(bb(&source));
            })
        });

        group.bench_with_input(BenchmarkId::new("read_many", count), &count, |b, &n| {
            b.iter(|| {
                let mut reader: &[u8] = bb(&buf[..]);
                let decoded: Vec<BenchSample> = reader.read_many(Some(n));
                bb(decoded);
            })
        });
    }
    group.finish();
}

// ============================================================================
// Prefixed strings
// ============================================================================

fn bench_prefixed_strings(c: &mut Criterion) {
    let labels: Vec<String> = (0..100).map(|i| format!("sensor/zone_{}/temp", i)).collect();
    let mut group = c.benchmark_group("prefixed_string");
    group.throughput(Throughput::Elements(labels.len() as u64));

    for width in PrefixWidth::ALL {
        let framed: usize = labels
            .iter()
            .filter_map(|l| prefixed_len(l, width).ok())
            .sum();
        let mut buf = vec![0u8; framed];

        group.bench_with_input(BenchmarkId::new("write", width), &width, |b, &w| {
            b.iter(|| {
                let mut writer: &mut [u8] = bb(&mut buf[..]);
                for label in &labels {
                    writer.write_prefixed(label, w);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("read", width), &width, |b, &w| {
            b.iter(|| {
                let mut reader: &[u8] = bb(&buf[..]);
                while !reader.is_exhausted() {
                    bb(reader.read_prefixed(w));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("read_borrowed", width), &width, |b, &w| {
            b.iter(|| {
                let mut reader: &[u8] = bb(&buf[..]);
                while let Ok(text) = reader.try_read_prefixed_str(w) {
                    bb(text);
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_primitives,
    bench_records,
    bench_prefixed_strings
);
criterion_main!(benches);
