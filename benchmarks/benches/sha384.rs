// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use sha2::Digest as _;

use sha384_core::{Sha384, sha384};

const SIZES: [usize; 6] = [0, 64, 128, 1024, 16 * 1024, 1024 * 1024];

fn benchmark_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha384_one_shot");

    for size in SIZES.iter() {
        let data = vec![0xa5u8; *size];
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(format!("{} bytes/sha384-core", size), &data, |b, data| {
            b.iter(|| sha384(black_box(data)));
        });

        // Reference: RustCrypto sha2
        group.bench_with_input(format!("{} bytes/sha2", size), &data, |b, data| {
            b.iter(|| sha2::Sha384::digest(black_box(data)));
        });
    }
    group.finish();
}

fn benchmark_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha384_incremental");
    let data = vec![0x5au8; 64 * 1024];
    group.throughput(Throughput::Bytes(data.len() as u64));

    // Chunk sizes that never line up with the 128-byte block
    for chunk in [1usize, 17, 111, 1000].iter() {
        group.bench_with_input(format!("{} byte chunks", chunk), chunk, |b, &chunk| {
            b.iter(|| {
                let mut engine = Sha384::new();
                for piece in data.chunks(chunk) {
                    engine.update(black_box(piece)).expect("update failed");
                }
                engine.finalize()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_one_shot, benchmark_incremental);
criterion_main!(benches);
