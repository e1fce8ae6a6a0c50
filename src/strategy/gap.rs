use std::fmt;

/// Produces the strides used by gap-insertion sort.
///
/// The returned gaps must be strictly decreasing and end in exactly one `1`, so that the last
/// pass is a plain insertion sort. Any such sequence yields a sorted result, the choice only
/// affects the number of comparisons.
pub trait GapStrategy: fmt::Debug {
    fn gaps(&self, len: usize) -> Vec<usize>;
}

/// Knuth's increments `(3^k - 1) / 2`, i.e. 1, 4, 13, 40, 121, ...
///
/// The largest gap does not exceed `ceil(len / 3)`, which makes the sequence
/// `floor(log3(2 * ceil(len / 3) + 1))` long. At least the final `1` is always returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct KnuthGapStrategy;

impl GapStrategy for KnuthGapStrategy {
    fn gaps(&self, len: usize) -> Vec<usize> {
        let bound = 2 * len.div_ceil(3) + 1;

        // k = floor(log3(bound)), computed without floating point.
        let mut k = 0;
        let mut pow = 1usize;
        while pow <= bound / 3 {
            pow *= 3;
            k += 1;
        }

        let mut gaps = Vec::with_capacity(k.max(1));
        let mut gap = 1;
        for _ in 0..k.max(1) {
            gaps.push(gap);
            gap = 3 * gap + 1;
        }
        gaps.reverse();

        gaps
    }
}

const CIURA_GAPS: [usize; 9] = [1, 4, 10, 23, 57, 132, 301, 701, 1750];

/// Ciura's empirically tuned increments, extended past 1750 by a factor of 2.25.
///
/// Only gaps smaller than the length are used, plus the final `1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CiuraGapStrategy;

impl GapStrategy for CiuraGapStrategy {
    fn gaps(&self, len: usize) -> Vec<usize> {
        let mut gaps = vec![1];

        for &gap in &CIURA_GAPS[1..] {
            if gap >= len {
                break;
            }
            gaps.push(gap);
        }

        if let Some(&last) = gaps.last() {
            if last == CIURA_GAPS[CIURA_GAPS.len() - 1] {
                let mut gap = last;
                loop {
                    // gap * 2.25
                    gap = match gap.checked_mul(9) {
                        Some(scaled) => scaled / 4,
                        None => break,
                    };
                    if gap >= len {
                        break;
                    }
                    gaps.push(gap);
                }
            }
        }

        gaps.reverse();
        gaps
    }
}

/// Checks the gap contract: strictly decreasing, positive, ending in 1.
pub(crate) fn is_valid_gap_sequence(gaps: &[usize]) -> bool {
    gaps.last() == Some(&1) && gaps.windows(2).all(|w| w[0] > w[1])
}
