//! Classic sorting algorithms over slices of `f64`.
//!
//! Every algorithm sorts in place into non-decreasing order using the IEEE-754 total order, so
//! `-0.0` lands before `0.0` and a NaN can never stall a scan.
//!
//! # Example
//!
//! ```
//! use sortlab_core::sorting::{QuickSorter, Sorter};
//!
//! let mut slice = vec![5.0, 3.0, 4.0, 1.0, 2.0];
//! QuickSorter.sort(&mut slice);
//! assert_eq!(vec![1.0, 2.0, 3.0, 4.0, 5.0], slice);
//! ```

pub mod benchmark;
mod sorters;

pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::{merge, merge_into, MergeSorter};
pub use sorters::quick_sorter::{partition, QuickSorter};
pub use sorters::selection_sorter::SelectionSorter;
pub use sorters::std_sorter::StdSorter;

use benchmark::Pattern;
use clap::ValueEnum;

/// The sorting algorithm must implement the trait `Sorter`.
pub trait Sorter {
    fn sort(&self, slice: &mut [f64]);
}

#[inline(always)]
pub(crate) fn is_less(a: f64, b: f64) -> bool {
    a.total_cmp(&b).is_lt()
}

#[inline(always)]
pub(crate) fn is_less_or_equal(a: f64, b: f64) -> bool {
    a.total_cmp(&b).is_le()
}

/// Every algorithm known to the benchmark harness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// Selection sort, scanning the suffix inline.
    Selection,
    /// Selection sort expressed through a minimum-of-suffix helper.
    RefinedSelection,
    /// The standard library's unstable sort.
    Baseline,
    /// The standard library's stable sort.
    StableBaseline,
    Insertion,
    /// Top-down merge sort that copies every merge back.
    Merge,
    /// Top-down merge sort that alternates between the input and the scratch buffer.
    PingPongMerge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Selection,
        Algorithm::RefinedSelection,
        Algorithm::Baseline,
        Algorithm::StableBaseline,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::PingPongMerge,
        Algorithm::Quick,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Selection => "selection sort",
            Algorithm::RefinedSelection => "improved selection sort",
            Algorithm::Baseline => "libsort",
            Algorithm::StableBaseline => "libsort stable",
            Algorithm::Insertion => "insertion sort",
            Algorithm::Merge => "merge sort",
            Algorithm::PingPongMerge => "xmerge sort",
            Algorithm::Quick => "quick sort",
        }
    }

    /// Quadratic algorithms, skipped by the benchmark modes that use large inputs.
    pub fn is_slow(&self) -> bool {
        matches!(
            self,
            Algorithm::Selection | Algorithm::RefinedSelection | Algorithm::Insertion
        )
    }

    /// Whether this algorithm needs quadratic time on `pattern`. Quick sort always pivots on the
    /// first element, which makes reversed input its worst case.
    pub fn is_slow_on(&self, pattern: Pattern) -> bool {
        self.is_slow() || (*self == Algorithm::Quick && pattern == Pattern::Reversed)
    }
}

impl Sorter for Algorithm {
    fn sort(&self, slice: &mut [f64]) {
        match self {
            Algorithm::Selection => SelectionSorter { refined: false }.sort(slice),
            Algorithm::RefinedSelection => SelectionSorter { refined: true }.sort(slice),
            Algorithm::Baseline => StdSorter { stable: false }.sort(slice),
            Algorithm::StableBaseline => StdSorter { stable: true }.sort(slice),
            Algorithm::Insertion => InsertionSorter.sort(slice),
            Algorithm::Merge => MergeSorter { ping_pong: false }.sort(slice),
            Algorithm::PingPongMerge => MergeSorter { ping_pong: true }.sort(slice),
            Algorithm::Quick => QuickSorter.sort(slice),
        }
    }
}
