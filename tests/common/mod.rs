#![allow(dead_code)]

use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use sort_strategies_rs::{patterns, Sort, SortEngine};

#[cfg(feature = "large_test_sizes")]
pub const MAX_LEN: usize = 100_000;
#[cfg(not(feature = "large_test_sizes"))]
pub const MAX_LEN: usize = 10_000;

/// Upper bound for the *O*(*n*^2) sorts.
pub const QUADRATIC_MAX_LEN: usize = 1_000;

/// Simple pivot choices go quadratic on some of the structured patterns.
pub const QUICK_MAX_LEN: usize = 10_000;

/// Bogosort only ever finishes on a handful of elements.
pub const BOGO_MAX_LEN: usize = 6;

const TEST_SIZES: [usize; 20] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 15, 16, 20, 33, 50, 100, 500, 1_000, 10_000, 100_000,
];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn test_sizes(max_len: usize) -> impl Iterator<Item = usize> {
    TEST_SIZES.into_iter().filter(move |&len| len <= max_len)
}

/// Sorts `v` with `engine` and compares against the standard library.
pub fn sort_comp<T, S>(engine: &mut SortEngine<S>, mut v: Vec<T>)
where
    T: Ord + Clone + Debug,
    S: Sort<T>,
{
    let seed = patterns::random_init_seed();

    let mut expected = v.clone();
    expected.sort();

    engine.sort(&mut v).unwrap();

    assert_eq!(
        v,
        expected,
        "{} produced a wrong order, seed: {seed}",
        engine.name()
    );
}

pub fn test_pattern<S>(engine: &mut SortEngine<S>, max_len: usize, pattern: fn(usize) -> Vec<i32>)
where
    S: Sort<i32>,
{
    for len in test_sizes(max_len) {
        sort_comp(engine, pattern(len));
    }
}

/// A value ordered by `key` only, `index` records its input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyed {
    pub key: i32,
    pub index: usize,
}

pub fn keyed(keys: &[i32]) -> Vec<Keyed> {
    keys.iter()
        .enumerate()
        .map(|(index, &key)| Keyed { key, index })
        .collect()
}

/// Checks that elements with equal keys kept their input order.
pub fn assert_stable(v: &[Keyed]) {
    for w in v.windows(2) {
        assert!(w[0].key <= w[1].key, "not sorted: {:?}", w);
        if w[0].key == w[1].key {
            assert!(w[0].index < w[1].index, "equal keys reordered: {:?}", w);
        }
    }
}

/// Lets the comparison panic after `budget` calls and checks that no element got lost or
/// duplicated.
pub fn panic_retains_original_set<S>(engine: &mut SortEngine<S>, len: usize, budget: usize)
where
    S: Sort<String>,
{
    let original: Vec<String> = patterns::random_uniform(len, 0..50)
        .into_iter()
        .map(|val| format!("{val:04}"))
        .collect();
    let mut v = original.clone();

    let mut calls = 0;
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _ = engine.sort_by_less(&mut v, |a: &String, b: &String| {
            calls += 1;
            if calls > budget {
                panic!("comparison budget exhausted");
            }
            a < b
        });
    }));

    let mut expected = original;
    expected.sort();
    let mut actual = v;
    actual.sort();
    assert_eq!(actual, expected, "panicked: {}", result.is_err());
}

/// Stamps out the shared property suite for an algorithm.
///
/// `$make` builds a fresh algorithm instance, it is evaluated once per test so generic
/// algorithms can pick up the element type of each test.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($prefix:ident, $make:expr, $max_len:expr) => {
        paste::paste! {
            #[test]
            fn [<$prefix _empty_and_singleton>]() {
                common::init_logging();
                let mut engine = sort_strategies_rs::SortEngine::new($make);

                let mut empty: Vec<i32> = Vec::new();
                engine.sort(&mut empty).unwrap();
                assert!(empty.is_empty());
                assert!(engine.report().is_none());
                assert_eq!(engine.to_string(), "");

                let mut single = vec![7];
                engine.sort(&mut single).unwrap();
                assert_eq!(single, [7]);
                assert_eq!(engine.report().map(|report| report.len()), Some(1));
            }

            #[test]
            fn [<$prefix _small_with_duplicates>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                let mut v = vec![5, 3, 3, 1, 4];
                engine.sort(&mut v).unwrap();
                assert_eq!(v, [1, 3, 3, 4, 5]);
            }

            #[test]
            fn [<$prefix _random>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                common::test_pattern(&mut engine, $max_len, sort_strategies_rs::patterns::random);
            }

            #[test]
            fn [<$prefix _random_dense_duplicates>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                common::test_pattern(&mut engine, $max_len, |len| {
                    sort_strategies_rs::patterns::random_uniform(len, 0..4)
                });
            }

            #[test]
            fn [<$prefix _random_zipf>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                common::test_pattern(&mut engine, $max_len, |len| {
                    sort_strategies_rs::patterns::random_zipf(len, 1.0)
                });
            }

            #[test]
            fn [<$prefix _structured_patterns>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                common::test_pattern(&mut engine, $max_len, sort_strategies_rs::patterns::ascending);
                common::test_pattern(&mut engine, $max_len, sort_strategies_rs::patterns::descending);
                common::test_pattern(&mut engine, $max_len, sort_strategies_rs::patterns::all_equal);
                common::test_pattern(&mut engine, $max_len, sort_strategies_rs::patterns::pipe_organ);
                common::test_pattern(&mut engine, $max_len, |len| {
                    sort_strategies_rs::patterns::saw_ascending(len, 5)
                });
            }

            #[test]
            fn [<$prefix _idempotent>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                for len in common::test_sizes($max_len) {
                    let mut v = sort_strategies_rs::patterns::random_uniform(len, 0..100);
                    engine.sort(&mut v).unwrap();
                    let once = v.clone();
                    engine.sort(&mut v).unwrap();
                    assert_eq!(v, once);
                }
            }

            #[test]
            fn [<$prefix _descending_comparator>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                for len in common::test_sizes($max_len) {
                    let mut v = sort_strategies_rs::patterns::random_uniform(len, -20..20);
                    let mut expected = v.clone();
                    expected.sort_by(|a, b| b.cmp(a));

                    engine.sort_by(&mut v, |a, b| b.cmp(a)).unwrap();
                    assert_eq!(v, expected);
                }
            }

            #[test]
            fn [<$prefix _strings>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                for len in common::test_sizes($max_len.min(1_000)) {
                    let v: Vec<String> = sort_strategies_rs::patterns::random(len)
                        .into_iter()
                        .map(|val| val.to_string())
                        .collect();
                    common::sort_comp(&mut engine, v);
                }
            }

            #[test]
            fn [<$prefix _panic_retains_original_set>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                let len = $max_len.min(100);
                for budget in [0, 1, 7, 50, 300] {
                    common::panic_retains_original_set(&mut engine, len, budget);
                }
            }
        }
    };
}

/// Adds a stability check on top of [`instantiate_sort_tests`].
#[macro_export]
macro_rules! instantiate_stability_tests {
    ($prefix:ident, $make:expr, $max_len:expr) => {
        paste::paste! {
            #[test]
            fn [<$prefix _stable_small>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                let mut v = common::keyed(&[5, 3, 3, 1, 4]);
                engine.sort_by(&mut v, |a, b| a.key.cmp(&b.key)).unwrap();
                common::assert_stable(&v);
                assert_eq!(v.iter().map(|e| e.index).collect::<Vec<_>>(), [3, 1, 2, 4, 0]);
            }

            #[test]
            fn [<$prefix _stable_random>]() {
                let mut engine = sort_strategies_rs::SortEngine::new($make);
                for len in common::test_sizes($max_len) {
                    let mut v = common::keyed(&sort_strategies_rs::patterns::random_uniform(len, 0..10));
                    engine.sort_by(&mut v, |a, b| a.key.cmp(&b.key)).unwrap();
                    common::assert_stable(&v);
                }
            }
        }
    };
}
