//! Benchmarks for the boundary scanner and both renderers

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use namecase_core::{scan, to_camel_case, to_snake_case};
use std::hint::black_box;

/// Generate identifier-heavy text with the given number of identifiers
fn generate_text(num_identifiers: usize) -> String {
    let identifiers = vec![
        "rawHTTPBody",
        "user_account_id",
        "IOBounds",
        "parseXML2JSON",
        "Anything goes!",
        "kebab-case-name",
        "TCPConnPool",
    ];

    identifiers
        .iter()
        .cycle()
        .take(num_identifiers)
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn benchmark_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for size in [10, 100, 1000].iter() {
        let text = generate_text(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| scan(black_box(text)).filter(|t| t.word_start).count());
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let text = generate_text(1000);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("snake", |b| b.iter(|| to_snake_case(black_box(&text))));
    group.bench_function("camel", |b| {
        b.iter(|| to_camel_case(black_box(&text), false))
    });

    group.finish();
}

criterion_group!(benches, benchmark_scan, benchmark_render);
criterion_main!(benches);
