//! Benchmarks for line rewriting throughput.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use scribe_text::{CaseDirectiveResolver, Pipeline, PipelineConfig};

/// Generate a text with a mix of directives on every line.
fn generate_text(lines: usize) -> String {
    let mut text = String::with_capacity(lines * 80);
    for i in 0..lines {
        text.push_str(&format!(
            "line {i} has {i:x} (hex) items , a odd one (up) and a few more words here (cap, 4)\n"
        ));
    }
    text
}

fn bench_resolve_line(c: &mut Criterion) {
    let resolver = CaseDirectiveResolver::new();
    let line = "the quick (up) brown fox (low) jumps over the lazy dog (cap, 5) again (up, 2)";

    c.bench_function("resolve_case_directives", |b| {
        b.iter(|| resolver.resolve(line));
    });
}

fn bench_process_line(c: &mut Criterion) {
    let pipeline = Pipeline::default();
    let line = "it was a 1E (hex) hour wait , sadly (up) and ' quoted ' too (cap, 2)";

    c.bench_function("process_line", |b| {
        b.iter(|| pipeline.process_line(line));
    });
}

fn bench_process_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_text");

    for lines in [100, 1_000, 10_000] {
        let text = generate_text(lines);
        group.throughput(Throughput::Bytes(text.len() as u64));

        let sequential = Pipeline::default();
        group.bench_with_input(BenchmarkId::new("sequential", lines), &text, |b, text| {
            b.iter(|| sequential.process_text(text));
        });

        let parallel = Pipeline::new(PipelineConfig {
            parallel: true,
            ..PipelineConfig::default()
        });
        group.bench_with_input(BenchmarkId::new("parallel", lines), &text, |b, text| {
            b.iter(|| parallel.process_text(text));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_line,
    bench_process_line,
    bench_process_text
);
criterion_main!(benches);
