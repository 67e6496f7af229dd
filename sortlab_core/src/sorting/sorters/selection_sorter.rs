use crate::sorting::{is_less, Sorter};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use sortlab_core::sorting::{SelectionSorter, Sorter};
///
/// let mut slice = [1.0, 5.0, 4.0, 2.0, 3.0];
/// SelectionSorter { refined: false }.sort(&mut slice);
/// assert_eq!(slice, [1.0, 2.0, 3.0, 4.0, 5.0]);
///
/// let mut slice = [1.0, 5.0, 4.0, 2.0, 3.0];
/// SelectionSorter { refined: true }.sort(&mut slice);
/// assert_eq!(slice, [1.0, 2.0, 3.0, 4.0, 5.0]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting algorithm. It has an O(n2) time complexity,
/// which makes it inefficient on large lists. The algorithm divides the input list into two
/// parts: a sorted sublist built up from left to right at the front of the list and a sublist of
/// the remaining unsorted items. It repeatedly finds the smallest element in the unsorted
/// sublist, swaps it with the leftmost unsorted element and moves the boundary one element to
/// the right.
///
/// Both variants make the same n²/2 comparisons and are not stable. The `refined` variant only
/// states the algorithm differently: it asks [`min_index`] for the position of the smallest
/// element of the remaining suffix and always swaps, where the plain variant tracks the minimum
/// inline and skips the swap when it is already in place.
pub struct SelectionSorter {
    pub refined: bool,
}

/// Position of the first smallest element of `slice`, or `0` for an empty slice.
pub fn min_index(slice: &[f64]) -> usize {
    let mut best = 0;
    for (i, &value) in slice.iter().enumerate() {
        if is_less(value, slice[best]) {
            best = i;
        }
    }
    best
}

impl Sorter for SelectionSorter {
    fn sort(&self, slice: &mut [f64]) {
        if self.refined {
            for unsorted in 0..slice.len() {
                let best = unsorted + min_index(&slice[unsorted..]);
                slice.swap(unsorted, best);
            }
        } else {
            for unsorted in 0..slice.len() {
                let mut smallest_in_rest = unsorted;
                for i in (unsorted + 1)..slice.len() {
                    if is_less(slice[i], slice[smallest_in_rest]) {
                        smallest_in_rest = i;
                    }
                }
                if unsorted != smallest_in_rest {
                    slice.swap(unsorted, smallest_in_rest);
                }
            }
        }
    }
}
