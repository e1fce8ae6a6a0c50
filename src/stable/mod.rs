//! Sorts that preserve the relative order of equal elements.

// Shifts each element left past its larger predecessors.
pub mod insertion;

// Adjacent swaps over the whole remaining range.
pub mod bubble;

// Adjacent swaps, bound shrinks to the last swap.
pub mod bubble_optimized;

// Top-down mergesort with a buffer for half the input.
pub mod merge;

// Histogram sort for small integer keys.
pub mod counting;

// Calls the standard library `slice::sort_by`.
pub mod library_stable;
