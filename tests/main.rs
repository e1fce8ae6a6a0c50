mod common;

use common::{BOGO_MAX_LEN, MAX_LEN, QUADRATIC_MAX_LEN, QUICK_MAX_LEN};
use sort_strategies_rs::stable;
use sort_strategies_rs::strategy::{CiuraGapStrategy, MedianOfThreePivotStrategy};
use sort_strategies_rs::unstable;
use sort_strategies_rs::unstable::bogo::BogoSort;
use sort_strategies_rs::unstable::quick::QuickSort;
use sort_strategies_rs::unstable::shell::ShellSort;

// --- Stable ---

instantiate_sort_tests!(insertion, stable::insertion::SortImpl, QUADRATIC_MAX_LEN);
instantiate_stability_tests!(insertion, stable::insertion::SortImpl, QUADRATIC_MAX_LEN);

instantiate_sort_tests!(bubble, stable::bubble::SortImpl, QUADRATIC_MAX_LEN);
instantiate_stability_tests!(bubble, stable::bubble::SortImpl, QUADRATIC_MAX_LEN);

instantiate_sort_tests!(
    bubble_optimized,
    stable::bubble_optimized::SortImpl,
    QUADRATIC_MAX_LEN
);
instantiate_stability_tests!(
    bubble_optimized,
    stable::bubble_optimized::SortImpl,
    QUADRATIC_MAX_LEN
);

instantiate_sort_tests!(merge, stable::merge::SortImpl, MAX_LEN);
instantiate_stability_tests!(merge, stable::merge::SortImpl, MAX_LEN);

instantiate_sort_tests!(library_stable, stable::library_stable::SortImpl, MAX_LEN);
instantiate_stability_tests!(library_stable, stable::library_stable::SortImpl, MAX_LEN);

// --- Unstable ---

instantiate_sort_tests!(selection, unstable::selection::SortImpl, QUADRATIC_MAX_LEN);

instantiate_sort_tests!(
    selection_optimized,
    unstable::selection_optimized::SortImpl,
    QUADRATIC_MAX_LEN
);

instantiate_sort_tests!(library, unstable::library::SortImpl, MAX_LEN);

instantiate_sort_tests!(heap, unstable::heap::SortImpl, MAX_LEN);

instantiate_sort_tests!(shell_knuth, ShellSort::new(), MAX_LEN);

instantiate_sort_tests!(
    shell_ciura,
    ShellSort::with_gap_strategy(Box::new(CiuraGapStrategy)),
    MAX_LEN
);

instantiate_sort_tests!(quick_middle, QuickSort::new(), QUICK_MAX_LEN);

instantiate_sort_tests!(
    quick_median3,
    QuickSort::with_pivot_strategy(Box::new(MedianOfThreePivotStrategy)),
    QUICK_MAX_LEN
);

instantiate_sort_tests!(bogo, BogoSort::new(), BOGO_MAX_LEN);

// --- Specific behavior ---

#[test]
fn selection_sorts_values_without_order_guarantee_for_equal_elements() {
    let mut v = common::keyed(&[5, 3, 3, 1, 4]);
    unstable::selection::sort_by(&mut v, |a, b| a.key.cmp(&b.key));
    assert_eq!(v.iter().map(|e| e.key).collect::<Vec<_>>(), [1, 3, 3, 4, 5]);
}

#[test]
fn module_entry_points() {
    let input = sort_strategies_rs::patterns::random_uniform(300, -50..50);
    let mut expected = input.clone();
    expected.sort();

    let sorts: [fn(&mut [i32]); 11] = [
        stable::insertion::sort,
        stable::bubble::sort,
        stable::bubble_optimized::sort,
        stable::merge::sort,
        stable::library_stable::sort,
        unstable::selection::sort,
        unstable::selection_optimized::sort,
        unstable::library::sort,
        unstable::heap::sort,
        |v| unstable::heap::sort_by(v, |a, b| a.cmp(b)),
        |v| stable::merge::sort_by(v, |a, b| a.cmp(b)),
    ];

    for sort in sorts {
        let mut v = input.clone();
        sort(&mut v);
        assert_eq!(v, expected);
    }
}

#[test]
fn optimized_bubble_stops_after_one_pass_on_sorted_input() {
    let mut v = sort_strategies_rs::patterns::ascending(500);
    let mut comparisons = 0;
    stable::bubble_optimized::sort_by_less(&mut v, &mut |a: &i32, b: &i32| {
        comparisons += 1;
        a < b
    });
    assert_eq!(comparisons, 499);
}

#[test]
fn zero_sized_types_are_left_alone() {
    let mut v = vec![(); 100];
    stable::merge::sort(&mut v);
    stable::insertion::sort(&mut v);
    assert_eq!(v.len(), 100);
}

#[test]
fn bogosort_with_seed_is_reproducible() {
    let bogo = BogoSort::new().with_seed(1357);
    let mut engine = sort_strategies_rs::SortEngine::new(bogo);

    let mut v = vec![4, 2, 5, 1, 3];
    engine.sort(&mut v).unwrap();
    assert_eq!(v, [1, 2, 3, 4, 5]);
}

#[test]
fn bogosort_shuffle_ceiling() {
    let mut engine = sort_strategies_rs::SortEngine::new(BogoSort::new().with_max_shuffles(0));

    let mut v = vec![2, 1];
    assert_eq!(
        engine.sort(&mut v),
        Err(sort_strategies_rs::SortError::ShuffleLimitExceeded { shuffles: 0 })
    );
    assert_eq!(v, [2, 1]);

    // Already sorted input needs no shuffle at all.
    let mut sorted = vec![1, 2, 3];
    engine.sort(&mut sorted).unwrap();
    assert_eq!(sorted, [1, 2, 3]);
}
