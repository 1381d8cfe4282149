//! # Forms-Auth Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | serialize / deserialize | < 5μs |
//! | HMAC per algorithm | < 10μs |
//! | protect / unprotect | < 50μs |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fa_crypto::{hmac, verify, DecryptionAlgorithm, ValidationAlgorithm};
use fa_ticket::{decrypt, deserialize, encrypt, serialize, MachineKey, Ticket};
use rand::Rng;

fn ticket(user_data_len: usize) -> Ticket {
    Ticket::builder("alice", 1_700_003_600_000)
        .issue_date(1_700_000_000_000)
        .persistent(true)
        .user_data("u".repeat(user_data_len))
        .cookie_path("/")
        .build()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for len in [0, 64, 127] {
        let ticket = ticket(len);
        let serialized = serialize(&ticket).unwrap();

        group.throughput(Throughput::Bytes(serialized.len() as u64));
        group.bench_with_input(BenchmarkId::new("serialize", len), &ticket, |b, t| {
            b.iter(|| black_box(serialize(t).unwrap()))
        });
        group.bench_with_input(
            BenchmarkId::new("deserialize", len),
            serialized.as_bytes(),
            |b, bytes| b.iter(|| black_box(deserialize(bytes).unwrap())),
        );
    }

    group.finish();
}

fn bench_hmac(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac");
    let mut rng = rand::thread_rng();
    let data: Vec<u8> = (0..256).map(|_| rng.gen()).collect();
    let key: Vec<u8> = (0..64).map(|_| rng.gen()).collect();

    for alg in ValidationAlgorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(alg), &alg, |b, &alg| {
            b.iter(|| black_box(hmac(&data, alg, &key)))
        });
    }

    let tag = hmac(&data, ValidationAlgorithm::Sha256, &key);
    let mut other = tag.clone();
    other[0] ^= 1;
    group.bench_function("verify_equal", |b| b.iter(|| black_box(verify(&tag, &tag))));
    group.bench_function("verify_first_byte_differs", |b| {
        b.iter(|| black_box(verify(&tag, &other)))
    });

    group.finish();
}

fn bench_protection(c: &mut Criterion) {
    let mut group = c.benchmark_group("protection");

    for alg in [
        ValidationAlgorithm::Sha1,
        ValidationAlgorithm::Sha256,
        ValidationAlgorithm::Sha512,
    ] {
        let key = MachineKey::generate(DecryptionAlgorithm::Aes, alg).unwrap();
        let serialized = serialize(&ticket(64)).unwrap();
        let protected = encrypt(&serialized, &key).unwrap();

        group.bench_with_input(BenchmarkId::new("encrypt", alg), &serialized, |b, s| {
            b.iter(|| black_box(encrypt(s, &key).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("decrypt", alg), &protected, |b, p| {
            b.iter(|| black_box(decrypt(p, &key).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec, bench_hmac, bench_protection);
criterion_main!(benches);
