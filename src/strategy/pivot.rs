use std::fmt;

use rand::Rng;

/// Picks the pivot partition sort splits `v[lo..=hi]` around.
///
/// Returns an index in `lo..=hi`. `is_less` is the ordering the surrounding sort uses, value
/// aware strategies may consult it. Partition sort is correct for any index in range, the choice
/// only affects how balanced the partitions are.
///
/// # Panics
///
/// Implementations panic if `lo > hi`.
pub trait PivotStrategy<T>: fmt::Debug {
    fn choose_pivot(
        &self,
        v: &[T],
        lo: usize,
        hi: usize,
        is_less: &mut dyn FnMut(&T, &T) -> bool,
    ) -> usize;
}

fn check_range<T>(v: &[T], lo: usize, hi: usize) {
    assert!(
        lo <= hi && hi < v.len(),
        "pivot range [{lo}, {hi}] is empty or out of bounds for a slice of length {}",
        v.len()
    );
}

/// Selects the middle element, `lo + (hi - lo) / 2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MiddlePivotStrategy;

impl<T> PivotStrategy<T> for MiddlePivotStrategy {
    fn choose_pivot(
        &self,
        v: &[T],
        lo: usize,
        hi: usize,
        _is_less: &mut dyn FnMut(&T, &T) -> bool,
    ) -> usize {
        check_range(v, lo, hi);
        lo + (hi - lo) / 2
    }
}

/// Selects the first element. Quadratic on already sorted input.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPivotStrategy;

impl<T> PivotStrategy<T> for FirstPivotStrategy {
    fn choose_pivot(
        &self,
        v: &[T],
        lo: usize,
        hi: usize,
        _is_less: &mut dyn FnMut(&T, &T) -> bool,
    ) -> usize {
        check_range(v, lo, hi);
        lo
    }
}

/// Selects the last element. Quadratic on already sorted input.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastPivotStrategy;

impl<T> PivotStrategy<T> for LastPivotStrategy {
    fn choose_pivot(
        &self,
        v: &[T],
        lo: usize,
        hi: usize,
        _is_less: &mut dyn FnMut(&T, &T) -> bool,
    ) -> usize {
        check_range(v, lo, hi);
        hi
    }
}

/// Selects the median of the first, middle and last element.
#[derive(Debug, Default, Clone, Copy)]
pub struct MedianOfThreePivotStrategy;

impl<T> PivotStrategy<T> for MedianOfThreePivotStrategy {
    fn choose_pivot(
        &self,
        v: &[T],
        lo: usize,
        hi: usize,
        is_less: &mut dyn FnMut(&T, &T) -> bool,
    ) -> usize {
        check_range(v, lo, hi);
        median3(v, lo, lo + (hi - lo) / 2, hi, is_less)
    }
}

/// Returns the index of the median of `v[a]`, `v[b]` and `v[c]`.
fn median3<T>(
    v: &[T],
    a: usize,
    b: usize,
    c: usize,
    is_less: &mut dyn FnMut(&T, &T) -> bool,
) -> usize {
    // Avoids the third comparison when `a` is already the median.
    let x = is_less(&v[a], &v[b]);
    let y = is_less(&v[a], &v[c]);
    if x == y {
        // If x=y=0 then b, c <= a. In this case we want to return max(b, c).
        // If x=y=1 then a < b, c. In this case we want to return min(b, c).
        // By toggling the outcome of b < c using XOR x we get this behavior.
        let z = is_less(&v[b], &v[c]);
        if z ^ x {
            c
        } else {
            b
        }
    } else {
        // Either c <= a < b or b <= a < c, thus a is our median.
        a
    }
}

/// Selects a uniformly random element using the thread local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPivotStrategy;

impl<T> PivotStrategy<T> for RandomPivotStrategy {
    fn choose_pivot(
        &self,
        v: &[T],
        lo: usize,
        hi: usize,
        _is_less: &mut dyn FnMut(&T, &T) -> bool,
    ) -> usize {
        check_range(v, lo, hi);
        rand::thread_rng().gen_range(lo..=hi)
    }
}
