use std::cmp::Ordering;
use std::mem::{self, ManuallyDrop};
use std::ptr;

sort_impl!("Insertion sort");

/// Sorts the slice, preserving the order of equal elements.
///
/// *O*(*n*^2) worst-case, *O*(*n*) on already sorted input, does not allocate.
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
    insertion_sort_gapped(v, 1, is_less);
}

/// Runs one insertion pass where neighbours are `gap` elements apart.
///
/// With `gap == 1` this is a full insertion sort. Elements only move past predecessors that
/// `is_less` puts after them, so equal elements keep their order within each gap-strided run.
pub(crate) fn insertion_sort_gapped<T, F>(v: &mut [T], gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 || gap == 0 {
        return;
    }

    for tail in gap..v.len() {
        // SAFETY: `gap > 0` and `gap <= tail < v.len()`.
        unsafe {
            insert_tail(v, tail, gap, is_less);
        }
    }
}

/// Sorts the run `.., tail - 2 * gap, tail - gap, tail` assuming it is sorted without `tail`.
///
/// # Safety
/// `gap > 0` and `gap <= tail < v.len()`.
unsafe fn insert_tail<T, F>(v: &mut [T], tail: usize, gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // SAFETY: see individual comments.
    unsafe {
        let v_base = v.as_mut_ptr();
        let tail_ptr = v_base.add(tail);

        // SAFETY: in-bounds as tail >= gap.
        let mut sift = tail - gap;
        if !is_less(&*tail_ptr, &*v_base.add(sift)) {
            return;
        }

        // SAFETY: after this read tail is never read from again, as we only ever read from
        // positions below tail. Thus this is effectively a move, not a copy. Should a panic
        // occur, or we have found the correct insertion position, gap_guard ensures the element
        // is moved back into the slice.
        let tmp = ManuallyDrop::new(tail_ptr.read());
        let mut gap_guard = CopyOnDrop {
            src: &*tmp,
            dst: tail_ptr,
        };

        loop {
            // SAFETY: we move sift into the gap (which is valid), and point the gap guard
            // destination at sift, ensuring that if a panic occurs the gap is once again filled.
            let sift_ptr = v_base.add(sift);
            ptr::copy_nonoverlapping(sift_ptr, gap_guard.dst, 1);
            gap_guard.dst = sift_ptr;

            if sift < gap {
                break;
            }

            sift -= gap;
            if !is_less(&tmp, &*v_base.add(sift)) {
                break;
            }
        }
    }
}

// When dropped, copies from `src` into `dst`.
struct CopyOnDrop<T> {
    src: *const T,
    dst: *mut T,
}

impl<T> Drop for CopyOnDrop<T> {
    fn drop(&mut self) {
        // SAFETY: `src` holds the element taken out of the slice and `dst` is the one hole left.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dst, 1);
        }
    }
}
