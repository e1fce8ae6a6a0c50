use std::cmp::Ordering;

sort_impl!("Optimized selection sort");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// Like selection sort, but the scan only remembers where the minimum of the remainder is and
/// swaps once per position. *O*(*n*^2) comparisons, *O*(*n*) swaps.
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
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut min_pos = i;
        for j in i + 1..len {
            if is_less(&v[j], &v[min_pos]) {
                min_pos = j;
            }
        }

        if min_pos != i {
            v.swap(i, min_pos);
        }
    }
}
