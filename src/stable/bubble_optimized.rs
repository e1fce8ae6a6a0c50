use std::cmp::Ordering;

sort_impl!("Optimized bubble sort");

/// Sorts the slice, preserving the order of equal elements.
///
/// Each pass only scans up to where the previous pass last swapped, and the sort stops after
/// the first pass without a swap. *O*(*n*) on sorted input, *O*(*n*^2) worst-case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by_less(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_less(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub fn sort_by_less<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut bound = v.len().saturating_sub(1);

    while bound > 0 {
        let mut last_swap = 0;

        for i in 0..bound {
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                last_swap = i;
            }
        }

        // Everything past `last_swap` is in its final position. No swap, or only one at the
        // front, means the slice is sorted.
        bound = last_swap;
    }
}
