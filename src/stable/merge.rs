use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("Mergesort");

/// Sorts the slice, preserving the order of equal elements.
///
/// Top-down mergesort, *O*(*n* \* log(*n*)) worst-case. Only the left run of each merge is moved
/// out of the slice, so the scratch buffer holds `len / 2 + 1` elements instead of `len`.
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
    // Sorting has no meaningful behavior on zero-sized types. Do nothing.
    if mem::size_of::<T>() == 0 || v.len() < 2 {
        return;
    }

    // The buffer is kept at length 0, it only ever holds shallow copies of elements that are
    // still owned by `v`. The left run of any merge is at most `ceil(len / 2)` long.
    let mut buf = Vec::<T>::with_capacity(v.len() / 2 + 1);

    merge_sort(v, buf.as_mut_ptr(), is_less);
}

fn merge_sort<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // The left run includes the midpoint, `ceil(len / 2)` elements.
    let mid = len - len / 2;

    merge_sort(&mut v[..mid], buf, is_less);
    merge_sort(&mut v[mid..], buf, is_less);

    // SAFETY: `0 < mid < len` and `buf` has room for `ceil(len / 2)` elements.
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// # Safety
/// `0 < mid < v.len()`, `buf` is valid for `mid` writes and does not overlap `v`.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v_base = v.as_mut_ptr();

    // The merge first copies the left run into `buf`. Then it walks the copied run and the right
    // run forwards, comparing their next unconsumed elements and copying the lesser one into `v`.
    // The write position never overtakes the right run, it trails it by the number of still
    // buffered left elements.
    //
    // As soon as the left run is fully consumed, the process is done, whatever is left of the
    // right run is already in place. If the right run gets consumed first, then `hole` copies the
    // rest of the left run into the remaining gap when dropped.
    //
    // Panic safety:
    //
    // If `is_less` panics at any point during the process, `hole` will get dropped and fill the
    // gap in `v` with the unconsumed range in `buf`, thus ensuring that `v` still holds every
    // object it initially held exactly once.
    let mut hole;

    // SAFETY: see function safety.
    unsafe {
        ptr::copy_nonoverlapping(v_base, buf, mid);
        hole = MergeHole {
            start: buf,
            end: buf.add(mid),
            dest: v_base,
        };
    }

    let v_end = unsafe { v_base.add(len) };
    let mut right = unsafe { v_base.add(mid) };

    while hole.start < hole.end && right < v_end {
        // Consume the lesser side.
        // If equal, prefer the left run to maintain stability.
        unsafe {
            let to_copy = if is_less(&*right, &*hole.start) {
                get_and_increment(&mut right)
            } else {
                get_and_increment(&mut hole.start)
            };
            ptr::copy_nonoverlapping(to_copy, get_and_increment(&mut hole.dest), 1);
        }
    }
    // Finally, `hole` gets dropped. If the left run was not fully consumed, whatever remains of
    // it will now be copied into the gap in `v`.

    unsafe fn get_and_increment<T>(ptr: &mut *mut T) -> *mut T {
        let old = *ptr;
        *ptr = unsafe { ptr.add(1) };
        old
    }

    // When dropped, copies the range `start..end` into `dest..`.
    struct MergeHole<T> {
        start: *mut T,
        end: *mut T,
        dest: *mut T,
    }

    impl<T> Drop for MergeHole<T> {
        fn drop(&mut self) {
            // SAFETY: `T` is not a zero-sized type, and these are pointers into the buffer and
            // into the gap of exactly the same length in the slice.
            unsafe {
                let len = self.end.offset_from(self.start) as usize;
                ptr::copy_nonoverlapping(self.start, self.dest, len);
            }
        }
    }
}
