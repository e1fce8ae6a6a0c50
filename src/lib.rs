//! Comparison and distribution sorts behind one timed execution contract.
//!
//! Every algorithm implements [`Sort`], and [`SortEngine`] wraps any of them to record how long
//! the last run took. Gap-insertion sort and partition sort take their gap and pivot choice from
//! swappable strategies, see [`strategy`].

use std::cmp::Ordering;

/// A fixed, per-algorithm display name.
pub trait Named {
    fn name(&self) -> &'static str;
}

/// The execution contract shared by every algorithm.
///
/// `is_less(a, b)` returns true if `a` must come before `b`. It has to be a strict weak order,
/// otherwise the resulting order is unspecified, but `v` always stays a permutation of its
/// original contents.
pub trait Sort<T>: Named {
    fn sort_by_less<F>(&self, v: &mut [T], is_less: &mut F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool;
}

/// Declares the display name of a stateless algorithm module.
///
/// Expands to a unit `SortImpl` that forwards to the module's `sort_by_less`.
macro_rules! sort_impl {
    ($name:expr) => {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct SortImpl;

        impl $crate::Named for SortImpl {
            fn name(&self) -> &'static str {
                $name
            }
        }

        impl<T> $crate::Sort<T> for SortImpl {
            #[inline]
            fn sort_by_less<F>(
                &self,
                v: &mut [T],
                is_less: &mut F,
            ) -> Result<(), $crate::SortError>
            where
                F: FnMut(&T, &T) -> bool,
            {
                sort_by_less(v, is_less);
                Ok(())
            }
        }
    };
}

pub mod engine;
pub mod error;
pub mod patterns;
pub mod stable;
pub mod strategy;
pub mod unstable;

pub use engine::{RunReport, SortEngine};
pub use error::SortError;

/// Returns true if no element of `v` must come before its predecessor.
pub fn is_sorted_by_less<T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}

/// Turns a strict weak order predicate back into a three-way comparison.
#[inline]
pub(crate) fn ordering_from_less<T, F>(a: &T, b: &T, is_less: &mut F) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(a, b) {
        Ordering::Less
    } else if is_less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
