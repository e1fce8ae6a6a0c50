use thiserror::Error;

/// Caller errors reported by an algorithm instead of producing a wrong order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Counting sort found an element whose key is not in `[0, limit]`. The input is untouched.
    #[error("element at position {position} lies outside the counting range [0, {limit}]")]
    KeyOutOfRange { position: usize, limit: usize },

    /// Counting sort was asked for a histogram with more than `usize::MAX` buckets.
    #[error("counting range [0, {limit}] does not fit a histogram")]
    LimitTooLarge { limit: usize },

    /// Counting sort could not probe the direction of the ordering for this key type.
    #[error("sort direction cannot be probed for this key type and must be set explicitly")]
    UnknownDirection,

    /// The gap strategy returned something other than strictly decreasing gaps ending in 1.
    /// The input is untouched.
    #[error("gap sequence {gaps:?} is not strictly decreasing towards a final gap of 1")]
    InvalidGapSequence { gaps: Vec<usize> },

    /// The pivot strategy picked an index outside the range it was asked about.
    #[error("pivot index {pivot} lies outside the range [{lo}, {hi}]")]
    PivotOutOfRange { pivot: usize, lo: usize, hi: usize },

    #[error("input still unsorted after {shuffles} shuffles")]
    ShuffleLimitExceeded { shuffles: u64 },
}
