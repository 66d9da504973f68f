use std::ops::Range;

use crate::compare::{Compare, Less};
use crate::partition::{partition, PivotStrategy, CUTOFF};
use crate::sorters::insertion_sorter::insertion_sort_by;
use crate::sorters::{SortBy, Sorter};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use orst_sorts::{PivotStrategy, QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter::default().sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// let mut slice = (0..100).rev().collect::<Vec<_>>();
/// QuickSorter { pivot: PivotStrategy::First }.sort(&mut slice);
/// assert_eq!(slice, (0..100).collect::<Vec<_>>());
///```
///
/// # Explanation
///
/// Quicksort is an in-place divide-and-conquer sort. It selects a pivot from the subrange,
/// partitions the other elements into those placed before and those placed after it, puts the
/// pivot between the two groups and sorts each group the same way.
///
/// # Algorithm
///
/// The pivot is chosen by [`PivotStrategy`]. Subranges of ten elements or less are finished with
/// insertion sort. Pending subranges live on an explicit stack and the smaller side of every
/// partition is handled first, so at most O(log n) ranges are ever pending. A bad pivot sequence
/// (already sorted input with `First`, for example) still costs O(n²) comparisons, but it never
/// exhausts the call stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter {
    pub pivot: PivotStrategy,
}

pub fn quick_sort_by<T, C>(slice: &mut [T], pivot: PivotStrategy, compare: &C)
where
    T: Clone,
    C: Compare<T> + ?Sized,
{
    let mut pending: Vec<Range<usize>> = vec![0..slice.len()];

    while let Some(range) = pending.pop() {
        if range.len() <= CUTOFF {
            insertion_sort_by(&mut slice[range], compare);
            continue;
        }

        let index = partition(slice, range.start, range.end - 1, pivot, compare);
        let lower = range.start..index;
        let upper = index + 1..range.end;

        // Popped last in, first out.
        if lower.len() < upper.len() {
            pending.push(upper);
            pending.push(lower);
        } else {
            pending.push(lower);
            pending.push(upper);
        }
    }
}

impl<T> SortBy<T> for QuickSorter
where
    T: Clone,
{
    #[inline]
    fn sort_by<C>(&self, slice: &mut [T], compare: &C)
    where
        C: Compare<T> + ?Sized,
    {
        quick_sort_by(slice, self.pivot, compare)
    }
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        quick_sort_by(slice, self.pivot, &Less)
    }
}
