//! Sorts that may reorder equal elements.

// Swaps whenever a later element must come first.
pub mod selection;

// One swap per position, with the minimum of the rest.
pub mod selection_optimized;

// Calls the standard library `slice::sort_unstable_by`.
pub mod library;

// In-place binary heap.
pub mod heap;

// Gapped insertion passes driven by a `GapStrategy`.
pub mod shell;

// Hoare partitioning around a pivot from a `PivotStrategy`.
pub mod quick;

// Shuffles until sorted. Only usable on a handful of elements.
pub mod bogo;
