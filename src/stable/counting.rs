//! Counting sort for elements with small non-negative integer keys.
//!
//! The caller supplies the inclusive upper bound `k` of the keys. Sorting builds a histogram of
//! `k + 1` counters, turns it into starting offsets and then places every element at the offset
//! of its key, so equal keys keep their relative order.

use log::trace;

use crate::{Named, Sort, SortError};

/// Whether smaller keys go first or last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Types counting sort can place by key.
pub trait CountingKey: Sized {
    /// The bucket of this element, `None` if the value has no non-negative integer key.
    fn counting_key(&self) -> Option<usize>;

    /// Two values with the keys `0` and `1`.
    ///
    /// When present the sort direction is found by asking the ordering predicate whether the
    /// first must come before the second. Types without a numeric domain return `None` and need
    /// an explicit [`Direction`].
    fn probe_pair() -> Option<(Self, Self)> {
        None
    }
}

macro_rules! impl_counting_key {
    ($($t:ty),*) => {
        $(
            impl CountingKey for $t {
                #[inline]
                fn counting_key(&self) -> Option<usize> {
                    usize::try_from(*self).ok()
                }

                fn probe_pair() -> Option<(Self, Self)> {
                    Some((0, 1))
                }
            }
        )*
    };
}

impl_counting_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingSort {
    limit: usize,
    direction: Option<Direction>,
}

impl CountingSort {
    /// Counting sort for keys in `[0, limit]`, direction probed from the ordering predicate.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            direction: None,
        }
    }

    /// Fixes the direction instead of probing the ordering predicate.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn direction<T, F>(&self, is_less: &mut F) -> Result<Direction, SortError>
    where
        T: CountingKey,
        F: FnMut(&T, &T) -> bool,
    {
        if let Some(direction) = self.direction {
            return Ok(direction);
        }

        let (zero, one) = T::probe_pair().ok_or(SortError::UnknownDirection)?;
        if is_less(&zero, &one) {
            Ok(Direction::Ascending)
        } else {
            Ok(Direction::Descending)
        }
    }
}

impl Named for CountingSort {
    fn name(&self) -> &'static str {
        "Counting sort"
    }
}

impl<T> Sort<T> for CountingSort
where
    T: CountingKey + Clone,
{
    fn sort_by_less<F>(&self, v: &mut [T], is_less: &mut F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        // Nothing to place, the direction does not matter.
        if v.len() < 2 {
            return Ok(());
        }

        let direction = self.direction(is_less)?;
        counting_sort(v, self.limit, direction)
    }
}

/// Sorts `v` by key. Fails without touching `v` if any key lies outside `[0, limit]`, or if
/// `limit + 1` buckets cannot be counted.
pub fn counting_sort<T>(v: &mut [T], limit: usize, direction: Direction) -> Result<(), SortError>
where
    T: CountingKey + Clone,
{
    if v.is_empty() {
        return Ok(());
    }

    let buckets = limit
        .checked_add(1)
        .ok_or(SortError::LimitTooLarge { limit })?;
    let mut counts = vec![0usize; buckets];
    let mut keys = Vec::with_capacity(v.len());

    for (position, elem) in v.iter().enumerate() {
        let key = elem
            .counting_key()
            .filter(|&key| key <= limit)
            .ok_or(SortError::KeyOutOfRange { position, limit })?;
        counts[key] += 1;
        keys.push(key);
    }

    // Turn the histogram into the first output position of every key.
    let mut total = 0;
    let mut to_offset = |count: &mut usize| {
        let n = *count;
        *count = total;
        total += n;
    };
    match direction {
        Direction::Ascending => counts.iter_mut().for_each(&mut to_offset),
        Direction::Descending => counts.iter_mut().rev().for_each(&mut to_offset),
    }

    trace!("counting sort offsets for {buckets} keys: {counts:?}");

    // `order[i]` is the position in `v` of the element that ends up at `i`. Visiting the input
    // front to back keeps equal keys in their original order.
    let mut order = vec![0usize; v.len()];
    for (i, &key) in keys.iter().enumerate() {
        order[counts[key]] = i;
        counts[key] += 1;
    }

    let sorted: Vec<T> = order.iter().map(|&i| v[i].clone()).collect();
    v.clone_from_slice(&sorted);

    Ok(())
}
