use std::hint::black_box;

use cjkspace::{
    linear::{linear_search, linear_search_all},
    Interval, IntervalTree,
};
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

/// Compare the tree against a linear scan of the same intervals, for both the
/// single-hit and the all-matches query.
pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("tree_vs_linear");

    for n_values in [10, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let pairs = (0..n_values).map(|_| rand.next_pair()).collect::<Vec<_>>();

    let t = IntervalTree::build(pairs.iter().copied()).unwrap();
    let intervals = t.iter().copied().collect::<Vec<_>>();
    let query = Interval::new(30_000, 30_100).unwrap();

    bench_tree_search(n_values, g, &t, &intervals, &query);
    bench_linear_search(n_values, g, &t, &intervals, &query);
    bench_tree_search_all(n_values, g, &t, &intervals, &query);
    bench_linear_search_all(n_values, g, &t, &intervals, &query);
}

macro_rules! query_bench {
    (
        $name:ident,
        |$t:ident, $intervals:ident, $query:ident| $run:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(
                n_values: usize,
                g: &mut BenchmarkGroup<M>,
                $t: &IntervalTree<u16>,
                $intervals: &[Interval<u16>],
                $query: &Interval<u16>,
            )
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(1));
                // Queries per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| black_box($run))
                });
            }
        }
    };
}

query_bench!(tree_search, |t, _intervals, query| t.search(query));
query_bench!(linear_search, |_t, intervals, query| linear_search(intervals, query));
query_bench!(tree_search_all, |t, _intervals, query| t.iter_containing(query).count());
query_bench!(linear_search_all, |_t, intervals, query| linear_search_all(intervals, query).count());
