// Dweve Benchlens - Benchmark run analysis toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Statistics and aggregation benchmarks.
//!
//! Measures `summarize` on growing samples and the full record → analysis
//! pipeline on synthetic runs.

use benchlens_core::{summarize, Aggregation, Analysis, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const CLIENTS: [&str; 4] = ["json", "proto", "string", "grpc"];
const OPERATIONS: [&str; 5] = ["echo", "sum", "login", "logout", "status"];

/// Deterministic pseudo-random latencies in `[0, 10)` ms.
fn latencies(n: usize) -> Vec<f64> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 10_000) as f64 / 1_000.0
        })
        .collect()
}

fn synthetic_run(iterations: usize) -> Vec<Record> {
    let durations = latencies(CLIENTS.len() * OPERATIONS.len() * iterations);
    let mut samples = durations.into_iter();
    let mut records = Vec::with_capacity(CLIENTS.len() * OPERATIONS.len() * iterations);

    for client in CLIENTS {
        for operation in OPERATIONS {
            for i in 0..iterations {
                let duration = samples.next().unwrap_or(1.0);
                records.push(
                    Record::new(client, operation, duration)
                        .with_iteration(i as u32 + 1)
                        .with_mem_alloc_delta((duration * 1024.0) as i64),
                );
            }
        }
    }
    records
}

// ============================================================================
// Summary Statistics
// ============================================================================

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for size in [10usize, 100, 1_000, 10_000] {
        let values = latencies(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| summarize(black_box(values)))
        });
    }

    group.finish();
}

// ============================================================================
// Pipeline
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for iterations in [10usize, 100, 1_000] {
        let records = synthetic_run(iterations);
        group.throughput(Throughput::Elements(records.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("aggregate", iterations),
            &records,
            |b, records| b.iter(|| Aggregation::from_records(black_box(records))),
        );

        group.bench_with_input(
            BenchmarkId::new("analysis", iterations),
            &records,
            |b, records| b.iter(|| Analysis::from_records(black_box(records))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_summarize, bench_pipeline);
criterion_main!(benches);
