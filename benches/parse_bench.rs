//! Benchmarks for specification parsing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gpu_request::{parse_device_request, parse_device_requests};

fn bench_parse_shorthand(c: &mut Criterion) {
    c.bench_function("parse_all", |b| {
        b.iter(|| parse_device_request(black_box("all")))
    });
}

fn bench_parse_full(c: &mut Criterion) {
    let spec = r#"driver=nvidia,"capabilities=compute,utility","options=foo=bar,baz=qux","device=0,2",count=1"#;

    c.bench_function("parse_full_spec", |b| {
        b.iter(|| parse_device_request(black_box(spec)))
    });
}

fn bench_parse_batch(c: &mut Criterion) {
    let specs: Vec<String> = (0..64)
        .map(|i| format!("driver=nvidia,\"device={i},{}\",\"options=slot={i}\"", i + 1))
        .collect();

    c.bench_function("parse_batch_64", |b| {
        b.iter(|| parse_device_requests(black_box(&specs)))
    });
}

criterion_group!(
    benches,
    bench_parse_shorthand,
    bench_parse_full,
    bench_parse_batch
);
criterion_main!(benches);
