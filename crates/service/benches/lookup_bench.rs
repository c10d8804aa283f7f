use criterion::{criterion_group, criterion_main, Criterion};

use service::store::CapitalStore;

fn bench_lookup(c: &mut Criterion) {
    let store = CapitalStore::with_sample_data();

    c.bench_function("capital_lookup_hit", |b| b.iter(|| store.capital_of("Texas")));
    c.bench_function("capital_lookup_miss", |b| {
        b.iter(|| store.capital_of("California"))
    });
    c.bench_function("capital_lookup_full_dataset", |b| {
        b.iter(|| store.entries().len())
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
