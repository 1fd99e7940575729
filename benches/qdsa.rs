use qdsv::signatures::qdsa::{qdsa_keypair, qdsa_sign, qdsa_verify};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_qdsa(c: &mut Criterion) {
    let seed = [0x5Eu8; 32];
    let msg = [0xA7u8; 32];

    let mut pk = [0u8; 32];
    let mut sk = [0u8; 64];
    qdsa_keypair(&mut pk, &mut sk, &seed);

    let mut sig = [0u8; 64];
    qdsa_sign(&mut sig, &msg, &pk, &sk);
    assert!(qdsa_verify(&sig, &pk, &msg));

    c.bench_function("qdsa verify", |b| {
        b.iter(|| qdsa_verify(black_box(&sig), black_box(&pk), black_box(&msg)))
    });

    c.bench_function("qdsa sign", |b| {
        b.iter(|| {
            let mut out = [0u8; 64];
            qdsa_sign(&mut out, black_box(&msg), black_box(&pk), black_box(&sk));
            out
        })
    });

    c.bench_function("qdsa keypair", |b| {
        b.iter(|| {
            let mut pk_out = [0u8; 32];
            let mut sk_out = [0u8; 64];
            qdsa_keypair(&mut pk_out, &mut sk_out, black_box(&seed));
            pk_out
        })
    });
}

criterion_group!(benches, bench_qdsa);
criterion_main!(benches);
