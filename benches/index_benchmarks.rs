//! Index benchmarks
//!
//! Throughput of the three hot paths: registering new documents,
//! re-registering (replace), and querying a pre-populated store.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench index_benchmarks
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use docdex::IndexStore;

const SAMPLE_CONTENT: &str =
    "the quick brown fox jumps over the lazy dog while 42 ravens watch from the wire";

fn populated_store(docs: usize) -> IndexStore {
    let mut store = IndexStore::with_capacity(docs);
    for i in 0..docs {
        store.register(
            format!("doc_{i:05}"),
            format!("{SAMPLE_CONTENT} shard{} unique{i}", i % 100),
        );
    }
    store
}

fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new_document", |b| {
        let mut store = IndexStore::new();
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            store.register(format!("doc_{i}"), black_box(SAMPLE_CONTENT));
        });
    });

    group.bench_function("replace_document", |b| {
        let mut store = populated_store(1_000);
        b.iter(|| {
            store.register("doc_00500", black_box(SAMPLE_CONTENT));
        });
    });

    group.finish();
}

fn query_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    let store = populated_store(10_000);
    group.throughput(Throughput::Elements(1));

    // Term present in every document (large posting set)
    group.bench_function("common_term", |b| {
        b.iter(|| black_box(store.query("quick")));
    });

    // Term present in 1% of documents
    group.bench_function("rare_term", |b| {
        b.iter(|| black_box(store.query("shard7")));
    });

    // Absent term (hash miss, empty snapshot)
    group.bench_function("missing_term", |b| {
        b.iter(|| black_box(store.query("zephyrine")));
    });

    group.finish();
}

criterion_group!(benches, register_benchmarks, query_benchmarks);
criterion_main!(benches);
