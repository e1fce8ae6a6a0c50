use std::cmp::Ordering;

sort_impl!("Selection sort");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// Every position is compared against the whole remainder, swapping each time a later element
/// must come first. *O*(*n*^2) comparisons and up to *O*(*n*^2) swaps.
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

    for i in 0..len {
        for j in i + 1..len {
            if is_less(&v[j], &v[i]) {
                v.swap(i, j);
            }
        }
    }
}
