use log::trace;

use crate::stable::insertion::insertion_sort_gapped;
use crate::strategy::gap::is_valid_gap_sequence;
use crate::strategy::{GapStrategy, KnuthGapStrategy};
use crate::{Named, Sort, SortError};

/// Shellsort: insertion sort passes over elements `gap` apart, for each gap of a
/// [`GapStrategy`] from largest to smallest.
///
/// Correctness only relies on the final gap being 1. The sequence is fetched once at the start
/// of each run, so a strategy swapped in with [`ShellSort::set_gap_strategy`] applies from the
/// next run on.
#[derive(Debug)]
pub struct ShellSort {
    gap_strategy: Box<dyn GapStrategy>,
}

impl Default for ShellSort {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellSort {
    /// Shellsort with [`KnuthGapStrategy`].
    pub fn new() -> Self {
        Self::with_gap_strategy(Box::new(KnuthGapStrategy))
    }

    pub fn with_gap_strategy(gap_strategy: Box<dyn GapStrategy>) -> Self {
        Self { gap_strategy }
    }

    pub fn gap_strategy(&self) -> &dyn GapStrategy {
        self.gap_strategy.as_ref()
    }

    /// Replaces the strategy, returning the previous one.
    pub fn set_gap_strategy(&mut self, gap_strategy: Box<dyn GapStrategy>) -> Box<dyn GapStrategy> {
        std::mem::replace(&mut self.gap_strategy, gap_strategy)
    }
}

impl Named for ShellSort {
    fn name(&self) -> &'static str {
        "Shellsort"
    }
}

impl<T> Sort<T> for ShellSort {
    fn sort_by_less<F>(&self, v: &mut [T], is_less: &mut F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let gaps = self.gap_strategy.gaps(v.len());
        trace!("shellsort gaps for {} elements: {gaps:?}", v.len());

        if !is_valid_gap_sequence(&gaps) {
            return Err(SortError::InvalidGapSequence { gaps });
        }

        for gap in gaps {
            insertion_sort_gapped(v, gap, is_less);
        }

        Ok(())
    }
}
