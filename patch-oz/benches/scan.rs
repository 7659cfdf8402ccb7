// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use patch_oz::{DEFAULT_URL, Pattern};

const CHUNK_SIZE: usize = 1 << 20;
const CHUNKS: usize = 8;

/// Builds `len` bytes of filler with the login URL embedded near the end
fn viewer_like(len: usize, search: &[u8]) -> Vec<u8> {
    let mut data: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
    let at = len - search.len() - 64;
    data[at..at + search.len()].copy_from_slice(search);
    data
}

fn find_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_all");
    let pattern = Pattern::login_url(DEFAULT_URL).unwrap();

    for chunks in 1..=CHUNKS {
        let len = chunks * CHUNK_SIZE;
        let data = viewer_like(len, pattern.search());

        group
            .throughput(Throughput::Bytes(len as u64))
            .bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
                b.iter(|| patch_oz::find_all(data, pattern.search()));
            });
    }

    group.finish();
}

fn patch_in_place(c: &mut Criterion) {
    let pattern = Pattern::login_url(DEFAULT_URL).unwrap();
    let data = viewer_like(CHUNKS * CHUNK_SIZE, pattern.search());

    c.bench_function("patch_in_place", |b| {
        b.iter_batched_ref(
            || data.clone(),
            |data| patch_oz::patch_in_place(data, &pattern).unwrap(),
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, find_all, patch_in_place);
criterion_main!(benches);
