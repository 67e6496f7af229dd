use crate::sorting::{is_less, Sorter};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort builds the final sorted array one item at a time. It iterates up the array,
/// growing the sorted list behind it. The newly added element is swapped with its predecessor
/// for as long as the predecessor is larger, and the walk stops at the first pair that is
/// already in order.
///
/// That early stop makes the algorithm linear on sorted input. Reversed input is its worst case:
/// every new element travels all the way to the front.
///
/// # Usage
///```
/// use sortlab_core::sorting::{InsertionSorter, Sorter};
///
/// let mut slice = [1.0, 5.0, 4.0, 2.0, 3.0];
/// InsertionSorter.sort(&mut slice);
/// assert_eq!(slice, [1.0, 2.0, 3.0, 4.0, 5.0]);
///```
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    #[inline]
    fn sort(&self, slice: &mut [f64]) {
        for unsorted in 1..slice.len() {
            let mut i = unsorted;
            while i > 0 && is_less(slice[i], slice[i - 1]) {
                slice.swap(i - 1, i);
                i -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1.0, 5.0, 4.0, 2.0, 3.0];
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).map(f64::from).collect::<Vec<_>>();
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().map(f64::from).collect::<Vec<_>>();
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, (1..1000).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn negative_and_fractional() {
        let mut slice = [0.5, -2.25, 1e300, -0.0, 0.0, -1e-300];
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, [-2.25, -1e-300, -0.0, 0.0, 0.5, 1e300]);
        assert!(slice[2].is_sign_negative());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<f64> = vec![];
        InsertionSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42.0];
        InsertionSorter.sort(&mut one);
        assert_eq!(one, vec![42.0]);

        let mut two = vec![1.0, 2.0];
        InsertionSorter.sort(&mut two);
        assert_eq!(two, vec![1.0, 2.0]);

        let mut two = vec![2.0, 1.0];
        InsertionSorter.sort(&mut two);
        assert_eq!(two, vec![1.0, 2.0]);

        let mut three = vec![3.0, 1.0, 2.0];
        InsertionSorter.sort(&mut three);
        assert_eq!(three, vec![1.0, 2.0, 3.0]);
    }
}
