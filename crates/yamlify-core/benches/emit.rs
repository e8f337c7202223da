//! Emitter throughput benchmarks.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use yamlify_core::{emit, emit_records};

/// A moderately nested document: mixed scalars, a multi-line string, and a
/// list of objects.
fn nested_doc() -> String {
    serde_json::json!({
        "service": "ingest",
        "replicas": 4,
        "healthy": true,
        "notes": "first line\nsecond line\n",
        "endpoints": [
            {"host": "10.0.0.1", "port": 8080, "tags": ["a", "b"]},
            {"host": "10.0.0.2", "port": 8081, "tags": []}
        ],
        "limits": {"cpu": 1.5, "memory": "512Mi"}
    })
    .to_string()
}

fn bench_emit(c: &mut Criterion) {
    let doc = nested_doc();
    c.bench_function("emit_nested", |b| {
        b.iter(|| emit(black_box(&doc)).unwrap())
    });

    let records: String = (0..100)
        .map(|i| format!(r#"{{"id":{},"name":"record {}","ok":true}}"#, i, i))
        .collect::<Vec<_>>()
        .join("\n");
    c.bench_function("emit_records_100", |b| {
        b.iter(|| emit_records(black_box(&records)))
    });
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);
