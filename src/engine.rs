use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::{Named, Sort, SortError};

/// Measurement of a single completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    len: usize,
    elapsed: Duration,
    name: &'static str,
}

impl RunReport {
    /// Number of elements sorted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Wall-clock time spent inside the algorithm.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Array size: {}.", self.len)?;
        writeln!(f, "Sorted in: {} seconds.", self.elapsed.as_secs())?;
        writeln!(f, "Algorithm name: {}", self.name)
    }
}

/// Runs an algorithm and keeps the measurement of its last successful run.
///
/// One engine can be reused for any number of sequential runs, each run replaces the previous
/// report. Running the same engine from several threads at once is not supported, `sort` takes
/// `&mut self`.
#[derive(Debug, Default, Clone)]
pub struct SortEngine<S> {
    algorithm: S,
    last_run: Option<RunReport>,
}

impl<S> SortEngine<S> {
    pub fn new(algorithm: S) -> Self {
        Self {
            algorithm,
            last_run: None,
        }
    }

    pub fn algorithm(&self) -> &S {
        &self.algorithm
    }

    /// Gives access to the algorithm, e.g. to swap its strategy before the next run.
    pub fn algorithm_mut(&mut self) -> &mut S {
        &mut self.algorithm
    }

    pub fn into_inner(self) -> S {
        self.algorithm
    }

    /// The last run, if it sorted at least one element.
    ///
    /// Empty runs are recorded but never reported, there is nothing meaningful to measure.
    pub fn report(&self) -> Option<&RunReport> {
        self.last_run.as_ref().filter(|report| !report.is_empty())
    }

    pub fn name(&self) -> &'static str
    where
        S: Named,
    {
        self.algorithm.name()
    }

    /// Sorts `v` in ascending order.
    pub fn sort<T>(&mut self, v: &mut [T]) -> Result<(), SortError>
    where
        T: Ord,
        S: Sort<T>,
    {
        self.sort_by_less(v, |a, b| a.lt(b))
    }

    /// Sorts `v` with a comparator function.
    pub fn sort_by<T, F>(&mut self, v: &mut [T], mut compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
        S: Sort<T>,
    {
        self.sort_by_less(v, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts `v` so that no element `b` follows an element `a` with `is_less(b, a)`.
    pub fn sort_by_less<T, F>(&mut self, v: &mut [T], mut is_less: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
        S: Sort<T>,
    {
        let name = self.algorithm.name();

        let start = Instant::now();
        let result = self.algorithm.sort_by_less(v, &mut is_less);
        let elapsed = start.elapsed();

        if let Err(err) = result {
            warn!("{name} failed on {} elements: {err}", v.len());
            return Err(err);
        }

        debug!("{name} sorted {} elements in {elapsed:?}", v.len());

        self.last_run = Some(RunReport {
            len: v.len(),
            elapsed,
            name,
        });

        Ok(())
    }
}

impl<S> fmt::Display for SortEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.report() {
            Some(report) => fmt::Display::fmt(report, f),
            None => Ok(()),
        }
    }
}
