use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mdb_geo::{State, ZipStateResolver, RANGES};

/// Naive lookup: scan every range of every state per query (no index).
fn scan_ranges(code: u32) -> Option<State> {
    RANGES
        .iter()
        .find(|(_, ranges)| ranges.iter().any(|range| range.contains(code)))
        .map(|(state, _)| *state)
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");
    group.sample_size(20);

    group.bench_function("expand_builtin_ranges", |b| {
        b.iter(|| black_box(ZipStateResolver::build().unwrap()));
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let resolver = ZipStateResolver::build().unwrap();
    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(1));

    // Hits early and late in the table, plus a miss.
    for code in [1067u32, 80331, 99997, 99999] {
        group.bench_with_input(BenchmarkId::new("indexed_int", code), &code, |b, &code| {
            b.iter(|| black_box(resolver.get_state(black_box(code))));
        });
        group.bench_with_input(BenchmarkId::new("range_scan", code), &code, |b, &code| {
            b.iter(|| black_box(scan_ranges(black_box(code))));
        });
    }

    group.bench_function("indexed_str", |b| {
        b.iter(|| black_box(resolver.get_state(black_box("01067"))));
    });

    group.finish();
}

criterion_group!(benches, bench_table_build, bench_lookup);
criterion_main!(benches);
