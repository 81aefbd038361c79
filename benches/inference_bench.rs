//! Benchmarks for normalization, inference and SQL export
//!
//! Run with: cargo bench --bench inference_bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use json2sql::export::SQLExporter;
use json2sql::import::{JSONNormalizer, normalize};
use json2sql::inference::RelationalInferrer;
use serde_json::Value;

/// Generate sample order records, each with nested lines and a customer
fn generate_sample_records(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!(
                r#"{{"order_no": "{}", "placed_at": "2024-01-15T10:30:00Z", "total": {}, "paid": {}, "customer": {{"name": "User {}", "email": "user{}@example.com"}}, "lines": [{{"sku": "A-{}", "qty": {}}}, {{"sku": "B-{}", "qty": 1}}]}}"#,
                i,
                100.0 + (i as f64 * 2.5),
                i % 2 == 0,
                i,
                i,
                i % 97,
                1 + i % 5,
                i % 13
            )
        })
        .collect()
}

fn as_array(records: &[String]) -> String {
    format!("[{}]", records.join(","))
}

fn as_ndjson(records: &[String]) -> String {
    records.join("\n")
}

/// Strict, NDJSON and loose input of the same records
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let records = generate_sample_records(200);

    let strict = as_array(&records);
    let ndjson = as_ndjson(&records);
    let loose = strict.replace("\"sku\"", "sku").replace("\"qty\"", "qty");

    for (name, input) in [("strict", &strict), ("ndjson", &ndjson), ("loose", &loose)] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", name), input, |b, input| {
            b.iter(|| black_box(JSONNormalizer::new().parse(input)));
        });
    }

    group.finish();
}

/// Schema inference with varying record counts
fn bench_schema_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_inference");

    for count in [10, 100, 1000].iter() {
        let value: Value = normalize(&as_array(&generate_sample_records(*count))).unwrap();
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("infer", count), &value, |b, value| {
            b.iter(|| black_box(RelationalInferrer::new().infer(value)));
        });
    }

    group.finish();
}

/// Full script rendering for an inferred schema
fn bench_sql_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_export");

    for count in [100, 1000].iter() {
        let value = normalize(&as_array(&generate_sample_records(*count))).unwrap();
        let schema = RelationalInferrer::new().infer(&value).unwrap();
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("export", count), &schema, |b, schema| {
            b.iter(|| black_box(SQLExporter.export(schema)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_schema_inference,
    bench_sql_export
);
criterion_main!(benches);
