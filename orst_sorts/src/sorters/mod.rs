//! Classical comparison sorts sharing one comparator contract.
//!
//! # Example
//!
//! ```
//! use orst_sorts::compare::Greater;
//! use orst_sorts::{HeapSorter, SortBy, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! HeapSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//!
//! HeapSorter.sort_by(&mut slice, &Greater);
//! assert_eq!(vec![5, 4, 3, 2, 1], slice);
//! ```

pub(crate) mod heap_sorter;
pub(crate) mod insertion_sorter;
pub(crate) mod merge_sorter;
pub(crate) mod quick_sorter;
pub(crate) mod shell_sorter;
pub(crate) mod three_way_sorter;

use clap::ValueEnum;
use serde::Serialize;

use crate::compare::Compare;
use crate::error::{Error, Result};
use crate::partition::PivotStrategy;

use heap_sorter::HeapSorter;
use insertion_sorter::InsertionSorter;
use merge_sorter::MergeSorter;
use quick_sorter::QuickSorter;
use shell_sorter::ShellSorter;
use three_way_sorter::ThreeWaySorter;

/// Sorts in ascending order under `Ord`. Every algorithm of the crate implements it.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);

    /// Sorts only the inclusive index range `[left, right]`, leaving everything outside of it
    /// untouched. `left > right` names an empty range.
    fn sort_range(&self, slice: &mut [T], left: usize, right: usize) -> Result<()> {
        self.sort(subrange(slice, left, right)?);
        Ok(())
    }
}

/// Sorts under a caller supplied comparator. Implemented by every algorithm that is not fixed to
/// ascending order.
pub trait SortBy<T> {
    fn sort_by<C>(&self, slice: &mut [T], compare: &C)
    where
        C: Compare<T> + ?Sized;

    /// Comparator counterpart of [`Sorter::sort_range`].
    fn sort_range_by<C>(&self, slice: &mut [T], left: usize, right: usize, compare: &C) -> Result<()>
    where
        C: Compare<T> + ?Sized,
    {
        self.sort_by(subrange(slice, left, right)?, compare);
        Ok(())
    }
}

pub(crate) fn subrange<T>(slice: &mut [T], left: usize, right: usize) -> Result<&mut [T]> {
    let len = slice.len();
    if right >= len {
        return Err(Error::InvalidRange { left, right, len });
    }
    if left > right {
        return Ok(&mut slice[..0]);
    }
    Ok(&mut slice[left..=right])
}

/// Every sorting algorithm of the crate, by name. Used by the command line and the benchmark to
/// pick an algorithm at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Insertion sort, shifting linearly
    Insertion,
    /// Shellsort with Shell's gap sequence (ascending only)
    Shell,
    /// Heapsort
    Heap,
    /// Top-down mergesort
    Merge,
    /// Quicksort, median-of-three pivot
    QuickMedianOfThree,
    /// Quicksort, middle element pivot
    QuickMiddle,
    /// Quicksort, first element pivot
    QuickFirst,
    /// Recursive less/equal/greater bucket sort (ascending only)
    ThreeWay,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::QuickMedianOfThree => "Quick Sort (median of three)",
            Algorithm::QuickMiddle => "Quick Sort (middle)",
            Algorithm::QuickFirst => "Quick Sort (first)",
            Algorithm::ThreeWay => "Three Way Sort",
        }
    }

    /// Algorithms that only know the natural `Ord` order.
    pub fn ascending_only(self) -> bool {
        matches!(self, Algorithm::Shell | Algorithm::ThreeWay)
    }

    /// Algorithms with quadratic running time on random input.
    pub fn quadratic(self) -> bool {
        matches!(self, Algorithm::Insertion)
    }

    fn quick(pivot: PivotStrategy) -> QuickSorter {
        QuickSorter { pivot }
    }

    /// Sorts `slice` in ascending order with this algorithm.
    pub fn sort<T>(self, slice: &mut [T])
    where
        T: Ord + Clone,
    {
        match self {
            Algorithm::Insertion => InsertionSorter::default().sort(slice),
            Algorithm::Shell => ShellSorter.sort(slice),
            Algorithm::Heap => HeapSorter.sort(slice),
            Algorithm::Merge => MergeSorter.sort(slice),
            Algorithm::QuickMedianOfThree => Self::quick(PivotStrategy::MedianOfThree).sort(slice),
            Algorithm::QuickMiddle => Self::quick(PivotStrategy::Middle).sort(slice),
            Algorithm::QuickFirst => Self::quick(PivotStrategy::First).sort(slice),
            Algorithm::ThreeWay => ThreeWaySorter.sort(slice),
        }
    }

    /// Sorts `slice` under `compare` with this algorithm. Fails for ascending-only algorithms.
    pub fn sort_by<T, C>(self, slice: &mut [T], compare: &C) -> Result<()>
    where
        T: Clone,
        C: Compare<T> + ?Sized,
    {
        match self {
            Algorithm::Insertion => InsertionSorter::default().sort_by(slice, compare),
            Algorithm::Heap => HeapSorter.sort_by(slice, compare),
            Algorithm::Merge => MergeSorter.sort_by(slice, compare),
            Algorithm::QuickMedianOfThree => {
                Self::quick(PivotStrategy::MedianOfThree).sort_by(slice, compare)
            }
            Algorithm::QuickMiddle => Self::quick(PivotStrategy::Middle).sort_by(slice, compare),
            Algorithm::QuickFirst => Self::quick(PivotStrategy::First).sort_by(slice, compare),
            Algorithm::Shell | Algorithm::ThreeWay => {
                return Err(Error::ComparatorUnsupported {
                    algorithm: self.name(),
                })
            }
        }
        Ok(())
    }
}
