use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use deeplink_rank::{compare_templates, PathConfig, Registry, Template};

fn rank_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank-compare");

    group.bench_function("first-difference", |b| {
        let lhs = Template::parse("scheme://host/one/{param}/three/four/five");
        let rhs = Template::parse("scheme://host/one/two/three/four/<config>");
        b.iter(|| compare_templates(&lhs, &rhs))
    });
}

fn registry_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry-find");

    group.bench_function("ranked", |b| {
        let config = PathConfig::new().insert("config", "two");
        let mut registry: Registry<usize> = Registry::with_config(config);
        registry
            .insert("scheme://host/one/<config>/three", 3)
            .insert("scheme://host/one/{param}/three", 2)
            .insert("scheme://host/one/two/three", 1);
        b.iter_with_large_drop(|| registry.find("scheme://host/one/two/three"))
    });

    group.bench_function("parse", |b| {
        b.iter_batched(
            || "scheme://host/one/{param}/<config>/four",
            Template::parse,
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, rank_compare, registry_find);
criterion_main!(benches);
