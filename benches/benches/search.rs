//! Benchmark automaton construction and scanning time.

use criterion::{criterion_group, criterion_main, Criterion};

use benches::corpus;
use benches::{AhoCorasick, LinkTrie, Matcher};

criterion_main! { benches }
criterion_group! { benches, bench_build, bench_find }

/// Benchmarks the time taken to build a matcher from a set of titles.
fn bench_build(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");

    let corpus = corpus::random(1_000, 16, 0);

    macro_rules! bench {
        ($M:ty) => {{
            g.bench_function(<$M as Matcher>::name(), |b| {
                b.iter(|| <$M as Matcher>::build(&corpus.titles));
            });
        }};
    }

    bench!(AhoCorasick);
    bench!(LinkTrie);
}

/// Benchmarks the time taken to find all titles in a text.
fn bench_find(c: &mut Criterion) {
    let mut g = c.benchmark_group("find");

    let corpus = corpus::random(1_000, 16, 10_000);

    macro_rules! bench {
        ($M:ty) => {{
            g.bench_function(<$M as Matcher>::name(), |b| {
                let matcher = <$M as Matcher>::build(&corpus.titles);
                b.iter(|| matcher.find_all(&corpus.text));
            });
        }};
    }

    bench!(AhoCorasick);
    bench!(LinkTrie);
}
