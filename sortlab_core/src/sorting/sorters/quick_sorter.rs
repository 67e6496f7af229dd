use crate::sorting::{is_less, is_less_or_equal, Sorter};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use sortlab_core::sorting::{QuickSorter, Sorter};
///
/// let mut slice = [1.0, 5.0, 4.0, 2.0, 3.0];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1.0, 2.0, 3.0, 4.0, 5.0]);
///```
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm. The slice is [partitioned](partition) around its
/// first element, which then sits at its final position, and the parts strictly left and right
/// of it are sorted recursively.
///
/// The pivot is always the first element. There is no randomization and no median selection, so
/// already sorted or reversed input degrades to O(n²) comparisons.
pub struct QuickSorter;

/// Partitions `slice` around its first element and returns the pivot's final index.
///
/// Two cursors close in on each other: `alpha` marks the last element known to be `<=` the
/// pivot and `beta` scans down from the end for an element that is. Whenever both stall the
/// element right of `alpha` is swapped with the one at `beta`. When they meet the pivot is
/// swapped into `alpha`.
///
/// On return every element left of the returned index is `<=` the pivot and every element right
/// of it is `>` the pivot. Slices shorter than two elements return `0` untouched.
///
/// ```
/// use sortlab_core::sorting::partition;
///
/// let mut slice = [3.0, 5.0, 1.0, 4.0, 2.0];
/// let p = partition(&mut slice);
/// assert_eq!(p, 2);
/// assert_eq!(slice[p], 3.0);
/// assert!(slice[..p].iter().all(|&x| x <= 3.0));
/// assert!(slice[p + 1..].iter().all(|&x| x > 3.0));
/// ```
pub fn partition(slice: &mut [f64]) -> usize {
    let len = slice.len();
    if len < 2 {
        return 0;
    }

    let pivot = slice[0];
    let mut alpha = 0;
    let mut beta = len - 1;

    'scan: loop {
        while is_less_or_equal(slice[alpha + 1], pivot) {
            alpha += 1;
            if alpha == len - 1 || alpha == beta {
                break 'scan;
            }
        }
        while is_less(pivot, slice[beta]) {
            beta -= 1;
            if beta == alpha {
                break 'scan;
            }
        }
        // slice[alpha + 1] > pivot >= slice[beta] and alpha + 1 < beta
        slice.swap(alpha + 1, beta);
    }

    slice.swap(0, alpha);
    alpha
}

// Recurses into the shorter side and loops on the longer one, which keeps the stack
// logarithmic even when the partitions are maximally unbalanced.
fn quicksort(mut slice: &mut [f64]) {
    while slice.len() >= 2 {
        let pivot_index = partition(slice);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot_index);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left);
            slice = right;
        } else {
            quicksort(right);
            slice = left;
        }
    }
}

impl Sorter for QuickSorter {
    #[inline]
    fn sort(&self, slice: &mut [f64]) {
        quicksort(slice)
    }
}
