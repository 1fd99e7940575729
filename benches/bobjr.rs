use qdsv::hash::BobJr;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_bobjr(c: &mut Criterion) {
    c.bench_function("bobjr 96 bytes", |b| {
        b.iter(|| {
            let mut ctx = BobJr::new();
            ctx.absorb(black_box(&[0u8; 96]));
            ctx.finish();
            ctx.digest()
        })
    });
}

criterion_group!(benches, bench_bobjr);
criterion_main!(benches);
