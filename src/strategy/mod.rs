//! Swappable building blocks for the strategy parameterized sorts.
//!
//! [`GapStrategy`] feeds gap-insertion sort ([`crate::unstable::shell`]), [`PivotStrategy`] feeds
//! partition sort ([`crate::unstable::quick`]). Both are held as boxed trait objects by the
//! algorithm that uses them and can be replaced between runs.

pub mod gap;
pub mod pivot;

pub use gap::{CiuraGapStrategy, GapStrategy, KnuthGapStrategy};
pub use pivot::{
    FirstPivotStrategy, LastPivotStrategy, MedianOfThreePivotStrategy, MiddlePivotStrategy,
    PivotStrategy, RandomPivotStrategy,
};
