use crate::sorting::Sorter;

/// The standard library's sorts behind the [`Sorter`] interface, used as the reference every
/// other algorithm is timed and checked against.
///
/// `stable: false` uses [`slice::sort_unstable_by`], `stable: true` uses [`slice::sort_by`].
/// Both compare with [`f64::total_cmp`], a proper three-way comparison that is a total order
/// even in the presence of NaN.
///
/// # Usage
///```
/// use sortlab_core::sorting::{StdSorter, Sorter};
///
/// let mut slice = [2.0, 1.0, 2.0, 1.0];
/// StdSorter { stable: false }.sort(&mut slice);
/// assert_eq!(slice, [1.0, 1.0, 2.0, 2.0]);
///```
pub struct StdSorter {
    pub stable: bool,
}

impl Sorter for StdSorter {
    #[inline]
    fn sort(&self, slice: &mut [f64]) {
        if self.stable {
            slice.sort_by(f64::total_cmp);
        } else {
            slice.sort_unstable_by(f64::total_cmp);
        }
    }
}
