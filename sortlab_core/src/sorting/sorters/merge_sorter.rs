use crate::error::SortError;
use crate::sorting::{is_less, is_less_or_equal, Sorter};

/// An implementation of top-down [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use sortlab_core::sorting::{MergeSorter, Sorter};
///
/// let mut slice = [1.0, 5.0, 4.0, 2.0, 3.0];
/// MergeSorter { ping_pong: false }.sort(&mut slice);
/// assert_eq!(slice, [1.0, 2.0, 3.0, 4.0, 5.0]);
///
/// let mut slice = [1.0, 5.0, 4.0, 2.0, 3.0];
/// MergeSorter { ping_pong: true }.sort(&mut slice);
/// assert_eq!(slice, [1.0, 2.0, 3.0, 4.0, 5.0]);
///```
///
/// # Algorithm
///
/// The slice is split into `n / 2` and `n - n / 2` elements, both halves are sorted recursively
/// and the two sorted runs are merged. One scratch buffer as long as the input is allocated per
/// call and shared by every merge of the call tree.
///
/// With `ping_pong: false` every merge writes into scratch and copies the run back.
///
/// With `ping_pong: true` nothing is copied back. Each level of the recursion is told which
/// buffer its sorted run has to end up in, and asks its children for the other one, so every
/// merge reads from one buffer and writes straight into the other. This roughly halves the
/// number of element moves. The top level always asks for the primary buffer.
///
/// Both variants are stable and produce bit-identical output.
pub struct MergeSorter {
    pub ping_pong: bool,
}

/// The buffer a subtree's sorted run has to end up in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Buffer {
    Primary,
    Scratch,
}

impl Buffer {
    fn other(self) -> Self {
        match self {
            Buffer::Primary => Buffer::Scratch,
            Buffer::Scratch => Buffer::Primary,
        }
    }
}

impl MergeSorter {
    /// Sorts `slice`, or leaves it untouched if the scratch buffer cannot be allocated.
    pub fn try_sort(&self, slice: &mut [f64]) -> Result<(), SortError> {
        match slice.len() {
            0 | 1 => return Ok(()),
            2 => {
                sort2(slice);
                return Ok(());
            }
            _ => {}
        }

        let mut scratch = Vec::new();
        scratch
            .try_reserve_exact(slice.len())
            .map_err(|_| SortError::ScratchAllocation { len: slice.len() })?;
        scratch.resize(slice.len(), 0.0);

        if self.ping_pong {
            ping_pong_sort(slice, &mut scratch, Buffer::Primary);
        } else {
            copy_back_sort(slice, &mut scratch);
        }

        Ok(())
    }
}

impl Sorter for MergeSorter {
    fn sort(&self, slice: &mut [f64]) {
        if let Err(e) = self.try_sort(slice) {
            log::error!("Merge sort cannot allocate scratch: {e}");
        }
    }
}

/// Merges the sorted runs `src[..mid]` and `src[mid..]` into `dst`.
///
/// Ties take the element of the left run first, so the merge is stable. `dst` must be exactly as
/// long as `src`.
pub fn merge_into(src: &[f64], mid: usize, dst: &mut [f64]) {
    debug_assert_eq!(src.len(), dst.len());

    let (left, right) = src.split_at(mid);
    let (mut l, mut r) = (0, 0);
    let mut out = 0;

    while l < left.len() && r < right.len() {
        if is_less_or_equal(left[l], right[r]) {
            dst[out] = left[l];
            l += 1;
        } else {
            dst[out] = right[r];
            r += 1;
        }
        out += 1;
    }

    // Only one of the runs has anything left.
    let rest = if l < left.len() { &left[l..] } else { &right[r..] };
    dst[out..].copy_from_slice(rest);
}

/// Merges the sorted runs `slice[..mid]` and `slice[mid..]` through `scratch` and copies the
/// result back into `slice`.
pub fn merge(slice: &mut [f64], mid: usize, scratch: &mut [f64]) {
    let scratch = &mut scratch[..slice.len()];
    merge_into(slice, mid, scratch);
    slice.copy_from_slice(scratch);
}

#[inline]
fn sort2(slice: &mut [f64]) {
    if is_less(slice[1], slice[0]) {
        slice.swap(0, 1);
    }
}

fn copy_back_sort(slice: &mut [f64], scratch: &mut [f64]) {
    if slice.len() == 2 {
        sort2(slice);
        return;
    }

    let half = slice.len() / 2;
    {
        let (lo, hi) = slice.split_at_mut(half);
        let (scratch_lo, scratch_hi) = scratch.split_at_mut(half);
        if lo.len() > 1 {
            copy_back_sort(lo, scratch_lo);
        }
        if hi.len() > 1 {
            copy_back_sort(hi, scratch_hi);
        }
    }
    merge(slice, half, scratch);
}

// `primary` and `scratch` always have the same length.
fn ping_pong_sort(primary: &mut [f64], scratch: &mut [f64], dest: Buffer) {
    match primary.len() {
        0 => {}
        1 => {
            if dest == Buffer::Scratch {
                scratch[0] = primary[0];
            }
        }
        2 => {
            sort2(primary);
            if dest == Buffer::Scratch {
                scratch.copy_from_slice(primary);
            }
        }
        len => {
            let half = len / 2;
            {
                let (lo, hi) = primary.split_at_mut(half);
                let (scratch_lo, scratch_hi) = scratch.split_at_mut(half);
                ping_pong_sort(lo, scratch_lo, dest.other());
                ping_pong_sort(hi, scratch_hi, dest.other());
            }
            match dest {
                Buffer::Primary => merge_into(scratch, half, primary),
                Buffer::Scratch => merge_into(primary, half, scratch),
            }
        }
    }
}
