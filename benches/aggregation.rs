use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pqpstat::histogram::Histogram;
use pqpstat::stats::{split_protein_names, ProteinGroup};
use std::collections::BTreeSet;

/// Accessions with group sizes cycling through 1..=max_group
fn make_accessions(count: usize, max_group: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let size = i % max_group + 1;
            let ids: Vec<String> = (0..size)
                .map(|j| format!("sp|P{:05}|PROT{}_HUMAN", i * 7 + j, j))
                .collect();
            format!("{}/{}", size, ids.join("/"))
        })
        .collect()
}

fn bench_split_accessions(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_protein_names");

    for count in [1_000, 10_000, 100_000] {
        let accessions = make_accessions(count, 8);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}groups", count)),
            &accessions,
            |b, accessions| b.iter(|| split_protein_names(black_box(accessions))),
        );
    }

    group.finish();
}

fn bench_unique_groups(c: &mut Criterion) {
    let groups = split_protein_names(make_accessions(50_000, 4));

    c.bench_function("unique_protein_groups_50k", |b| {
        b.iter(|| {
            let unique: BTreeSet<&ProteinGroup> = black_box(&groups).iter().collect();
            unique.len()
        })
    });
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for count in [10_000, 100_000, 1_000_000] {
        let values: Vec<f64> = (0..count).map(|i| ((i * 31) % 97) as f64).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}values", count)),
            &values,
            |b, values| b.iter(|| Histogram::from_values(black_box(values), 50).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_split_accessions, bench_unique_groups, bench_histogram);
criterion_main!(benches);
