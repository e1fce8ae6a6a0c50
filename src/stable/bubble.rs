use std::cmp::Ordering;

sort_impl!("Bubble sort");

/// Sorts the slice, preserving the order of equal elements.
///
/// Always performs `n - 1` passes, *O*(*n*^2) even on sorted input.
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

    for i in 1..len {
        // After pass `i` the last `i` elements are in their final position.
        for j in 0..len - i {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
            }
        }
    }
}
