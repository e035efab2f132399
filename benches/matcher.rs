use criterion::{criterion_group, criterion_main, Criterion};
use route_matcher::{compile, PatternCache};

const PATTERN: &str = "/users/{id}/posts/{postId}";
const PATH: &str = "/users/42/posts/7";

fn matcher_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher-find");

    group.bench_function("two-segments", |b| {
        let matcher = compile(PATTERN).unwrap();
        b.iter_with_large_drop(|| matcher.find(PATH))
    });

    group.bench_function("splat", |b| {
        let matcher = compile("/files/*").unwrap();
        b.iter_with_large_drop(|| matcher.find("/files/home/asd/.bashrc"))
    });
}

fn matcher_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher-compile");

    group.bench_function("uncached", |b| b.iter(|| compile(PATTERN).unwrap()));

    group.bench_function("cached", |b| {
        let cache = PatternCache::new();
        b.iter(|| cache.get_or_compile(PATTERN).unwrap())
    });
}

criterion_group!(benches, matcher_find, matcher_compile);
criterion_main!(benches);
