use criterion::{black_box, criterion_group, criterion_main, Criterion};
use school_search::{search_schools, SchoolIndex};
use test_utils::school_record;

fn sample_records(count: usize) -> Vec<school_search::SchoolRecord> {
    let cities = ["SPRINGFIELD", "CHICAGO", "SEATTLE", "PORTLAND", "DENVER"];
    let states = ["IL", "IL", "WA", "OR", "CO"];

    (0..count)
        .map(|i| {
            school_record(
                &format!("DISTRICT {} HIGH SCHOOL", i),
                cities[i % cities.len()],
                states[i % states.len()],
            )
        })
        .collect()
}

fn benchmark_build_index(c: &mut Criterion) {
    let records = sample_records(1_000);

    c.bench_function("build_index", |b| {
        b.iter(|| SchoolIndex::build(black_box(records.clone())))
    });
}

fn benchmark_search_schools(c: &mut Criterion) {
    let index = SchoolIndex::build(sample_records(1_000)).expect("records are schema-complete");

    c.bench_function("search_schools", |b| {
        b.iter(|| {
            search_schools(
                black_box(&index),
                black_box("district 42 springfield illinois"),
                3,
            )
        })
    });
}

criterion_group!(benches, benchmark_build_index, benchmark_search_schools);
criterion_main!(benches);
