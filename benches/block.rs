use chacha_trace::cipher::chacha20::{ChaCha20, block_transform, build_state};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_block(c: &mut Criterion) {
    let state = build_state(&[0u8; 32], 1, &[0u8; 12]).unwrap();

    c.bench_function("chacha20 block", |b| {
        b.iter(|| block_transform(black_box(&state), false))
    });

    c.bench_function("chacha20 block traced", |b| {
        b.iter(|| block_transform(black_box(&state), true))
    });
}

pub fn bench_stream(c: &mut Criterion) {
    let cipher = ChaCha20::from_parts([0u8; 32], [0u8; 12]);
    let data = [0u8; 4096];

    c.bench_function("chacha20 4096 bytes", |b| {
        b.iter(|| cipher.apply_keystream(1, black_box(&data)))
    });
}

criterion_group!(benches, bench_block, bench_stream);
criterion_main!(benches);
