use std::cmp::Ordering;

use crate::ordering_from_less;

sort_impl!("Library stable sort");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    v.sort();
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.sort_by(compare);
}

pub fn sort_by_less<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    v.sort_by(|a, b| ordering_from_less(a, b, is_less));
}
