//! Pivot selection and partitioning shared by quicksort and quickselect.
//!
//! All indices are inclusive, `left` and `right` bound the active subrange. The pivot is parked
//! in a fixed slot at the right end of the subrange, the remaining window is partitioned around
//! a copy of it, and the parked pivot is finally swapped into its resting index.

use clap::ValueEnum;
use serde::Serialize;

use crate::compare::Compare;

/// Subranges of at most this many elements are finished with insertion sort instead of being
/// partitioned.
pub(crate) const CUTOFF: usize = 10;

/// How quicksort picks the value it partitions around.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PivotStrategy {
    /// Median of the first, middle and last element. The two outer elements double as scan
    /// sentinels.
    #[default]
    MedianOfThree,
    /// The middle element.
    Middle,
    /// The element right after the first one.
    First,
}

/// Orders `slice[left]`, `slice[center]` and `slice[right]` and parks the median at
/// `right - 1`. Returns the parking slot.
pub(crate) fn median_of_three<T, C>(slice: &mut [T], left: usize, right: usize, compare: &C) -> usize
where
    C: Compare<T> + ?Sized,
{
    let center = left + (right - left) / 2;

    if compare.compare(&slice[center], &slice[left]) {
        slice.swap(left, center);
    }
    if compare.compare(&slice[right], &slice[left]) {
        slice.swap(left, right);
    }
    if compare.compare(&slice[right], &slice[center]) {
        slice.swap(center, right);
    }

    slice.swap(center, right - 1);
    right - 1
}

/// Parks the middle element at `right - 1`. Returns the parking slot.
pub(crate) fn middle<T>(slice: &mut [T], left: usize, right: usize) -> usize {
    let center = left + (right - left) / 2;
    slice.swap(center, right - 1);
    right - 1
}

/// Parks the element at `left + 1` at `right`. Returns the parking slot.
pub(crate) fn first<T>(slice: &mut [T], left: usize, right: usize) -> usize {
    slice.swap(left + 1, right);
    right
}

/// Partitions the window `[start, slot - 1]` around the value parked at `slot` and swaps the
/// parked value into its final index, which is returned.
///
/// Afterwards nothing in `[start, index)` must be placed after the pivot and nothing in
/// `(index, slot]` must be placed before it.
fn partition_window<T, C>(slice: &mut [T], start: usize, slot: usize, compare: &C) -> usize
where
    T: Clone,
    C: Compare<T> + ?Sized,
{
    debug_assert!(start < slot);

    let pivot = slice[slot].clone();
    let mut i = start;
    let mut j = slot - 1;

    loop {
        // The parked pivot stops `i` for any strict weak order, the bounds keep a broken
        // comparator inside the window.
        while i < slot && compare.compare(&slice[i], &pivot) {
            i += 1;
        }
        while j > start && compare.compare(&pivot, &slice[j]) {
            j -= 1;
        }

        if i < j {
            slice.swap(i, j);
            i += 1;
            j -= 1;
        } else {
            break;
        }
    }

    slice.swap(i, slot);
    i
}

/// Selects a pivot for `[left, right]` with `strategy` and partitions the subrange around it.
/// Returns the pivot's final index.
///
/// The subrange must hold more than [`CUTOFF`] elements.
pub(crate) fn partition<T, C>(
    slice: &mut [T],
    left: usize,
    right: usize,
    strategy: PivotStrategy,
    compare: &C,
) -> usize
where
    T: Clone,
    C: Compare<T> + ?Sized,
{
    debug_assert!(left + CUTOFF <= right);

    match strategy {
        PivotStrategy::MedianOfThree => {
            // slice[left] and slice[right] are already on the correct side.
            let slot = median_of_three(slice, left, right, compare);
            partition_window(slice, left + 1, slot, compare)
        }
        PivotStrategy::Middle => {
            let slot = middle(slice, left, right);
            let mut index = partition_window(slice, left, slot, compare);

            // slice[right] sits behind the parking slot and was never scanned.
            if compare.compare(&slice[right], &slice[index]) {
                slice[index..=right].rotate_right(1);
                index += 1;
            }
            index
        }
        PivotStrategy::First => {
            let slot = first(slice, left, right);
            partition_window(slice, left, slot, compare)
        }
    }
}
