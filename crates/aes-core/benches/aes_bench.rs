use core::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{decrypt_block, encrypt_block, KeySchedule, KeySize, BLOCK_SIZE};

fn bench_key_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_expansion");
    for size in KeySize::ALL {
        let key = vec![0u8; size.key_bytes()];
        group.bench_function(format!("nk{}", size.nk()), |b| {
            b.iter(|| KeySchedule::from_key_bytes(black_box(&key)));
        });
    }
    group.finish();
}

fn bench_blocks(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut group = c.benchmark_group("block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));
    for size in KeySize::ALL {
        let mut key = vec![0u8; size.key_bytes()];
        rng.fill_bytes(&mut key);
        let Ok(schedule) = KeySchedule::from_key_bytes(&key) else {
            continue;
        };
        let mut block = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut block);

        group.bench_function(format!("encrypt_nk{}", size.nk()), |b| {
            b.iter(|| encrypt_block(black_box(&block), &schedule));
        });
        group.bench_function(format!("decrypt_nk{}", size.nk()), |b| {
            b.iter(|| decrypt_block(black_box(&block), &schedule));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_key_expansion, bench_blocks);
criterion_main!(benches);
