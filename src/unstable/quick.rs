use std::fmt;

use crate::strategy::{MiddlePivotStrategy, PivotStrategy};
use crate::{Named, Sort, SortError};

/// Quicksort with Hoare partitioning around a pivot picked by a [`PivotStrategy`].
///
/// The pivot value is cloned out of the slice before partitioning, hence `T: Clone`. Not stable.
/// *O*(*n* \* log(*n*)) on average, *O*(*n*^2) when the strategy keeps picking extremes, e.g.
/// the middle element on an adversarial input. Swapping the strategy is the way to mitigate that.
/// Stack depth stays logarithmic regardless, only the shorter side is recursed into.
pub struct QuickSort<T> {
    pivot_strategy: Box<dyn PivotStrategy<T>>,
}

impl<T> fmt::Debug for QuickSort<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuickSort")
            .field("pivot_strategy", &self.pivot_strategy)
            .finish()
    }
}

impl<T> Default for QuickSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QuickSort<T> {
    /// Quicksort with [`MiddlePivotStrategy`].
    pub fn new() -> Self {
        Self::with_pivot_strategy(Box::new(MiddlePivotStrategy))
    }

    pub fn with_pivot_strategy(pivot_strategy: Box<dyn PivotStrategy<T>>) -> Self {
        Self { pivot_strategy }
    }

    pub fn pivot_strategy(&self) -> &dyn PivotStrategy<T> {
        self.pivot_strategy.as_ref()
    }

    /// Replaces the strategy, returning the previous one. Applies from the next run on.
    pub fn set_pivot_strategy(
        &mut self,
        pivot_strategy: Box<dyn PivotStrategy<T>>,
    ) -> Box<dyn PivotStrategy<T>> {
        std::mem::replace(&mut self.pivot_strategy, pivot_strategy)
    }
}

impl<T> Named for QuickSort<T> {
    fn name(&self) -> &'static str {
        "Quicksort"
    }
}

impl<T> Sort<T> for QuickSort<T>
where
    T: Clone,
{
    fn sort_by_less<F>(&self, v: &mut [T], is_less: &mut F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        if v.len() < 2 {
            return Ok(());
        }

        self.quicksort(v, 0, v.len() - 1, is_less)
    }
}

impl<T: Clone> QuickSort<T> {
    /// Sorts `v[lo..=hi]`.
    fn quicksort<F>(
        &self,
        v: &mut [T],
        mut lo: usize,
        mut hi: usize,
        is_less: &mut F,
    ) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        while lo < hi {
            let pivot_pos = self.pivot_strategy.choose_pivot(v, lo, hi, is_less);
            if !(lo..=hi).contains(&pivot_pos) {
                return Err(SortError::PivotOutOfRange {
                    pivot: pivot_pos,
                    lo,
                    hi,
                });
            }

            let pivot = v[pivot_pos].clone();
            let split = lo + partition(&mut v[lo..=hi], &pivot, is_less);

            // Only happens if the pivot was the unique maximum and already sat at `hi`, everything
            // before it is smaller.
            if split > hi {
                hi -= 1;
                continue;
            }

            // `lo < split <= hi`, both sides are non-empty. Recurse into the shorter side and
            // continue with the longer one.
            if split - lo < hi + 1 - split {
                self.quicksort(v, lo, split - 1, is_less)?;
                lo = split;
            } else {
                self.quicksort(v, split, hi, is_less)?;
                hi = split - 1;
            }
        }

        Ok(())
    }
}

/// Hoare partition of `v` around `pivot`, which must be equal to some element of `v`.
///
/// Returns the split index `s`: no element of `v[..s]` must come after `pivot` and no element of
/// `v[s..]` must come before it. `s >= 1`, and `s == v.len()` only if the pivot is a unique
/// maximum at the end of `v`.
fn partition<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lo = 0;
    let mut hi = v.len() - 1;

    loop {
        // Both scans are bounded: on the first round by the pivot itself, afterwards by the
        // elements just swapped into place.
        while is_less(&v[lo], pivot) {
            lo += 1;
        }
        while is_less(pivot, &v[hi]) {
            hi -= 1;
        }

        if lo > hi {
            return lo;
        }

        v.swap(lo, hi);
        lo += 1;
        if hi == 0 {
            return lo;
        }
        hi -= 1;

        if lo > hi {
            return lo;
        }
    }
}
