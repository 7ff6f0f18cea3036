use criterion::{criterion_group, criterion_main, Criterion, black_box};

use doms_access::{record, AppConfig, CaseAccessor, Dataset};

fn synthetic_dataset(n: usize) -> Dataset {
    (0..n)
        .map(|i| record! { "case_id" => i.to_string(), "text" => format!("Dom i sag {i}") })
        .collect()
}

fn bench_lookup(c: &mut Criterion) {
    let n = 50_000;
    let mut acc = CaseAccessor::new(AppConfig::default(), synthetic_dataset(n), |_cfg: &AppConfig| {
        Err("benchmarks only hit the cache".into())
    });

    c.bench_function("get_case_hit_first", |b| {
        b.iter(|| acc.get_case(black_box(0usize)).map(|r| r.len()).unwrap_or(0))
    });

    c.bench_function("get_case_hit_last", |b| {
        b.iter(|| acc.get_case(black_box(n - 1)).map(|r| r.len()).unwrap_or(0))
    });

    c.bench_function("get_case_hit_middle", |b| {
        b.iter(|| acc.get_case(black_box("25000")).map(|r| r.len()).unwrap_or(0))
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
