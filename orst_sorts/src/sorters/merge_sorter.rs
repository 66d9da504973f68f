use crate::compare::{Compare, Less};
use crate::sorters::{SortBy, Sorter};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use orst_sorts::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Algorithm
///
/// Top-down: both halves are sorted recursively and then merged through a scratch buffer the
/// size of the slice. The buffer is allocated once per call and shared by every merge. When the
/// heads of both halves are equivalent the left one is taken first, which makes the sort
/// stable. O(n log n) comparisons and O(n) extra space in every case.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter;

pub fn merge_sort_by<T, C>(slice: &mut [T], compare: &C)
where
    T: Clone,
    C: Compare<T> + ?Sized,
{
    if slice.len() < 2 {
        return;
    }
    let mut scratch = slice.to_vec();
    let right = slice.len() - 1;
    merge_sort_range(slice, &mut scratch, 0, right, compare);
}

fn merge_sort_range<T, C>(slice: &mut [T], scratch: &mut [T], left: usize, right: usize, compare: &C)
where
    T: Clone,
    C: Compare<T> + ?Sized,
{
    if left < right {
        let center = left + (right - left) / 2;
        merge_sort_range(slice, scratch, left, center, compare);
        merge_sort_range(slice, scratch, center + 1, right, compare);
        merge(slice, scratch, left, center + 1, right, compare);
    }
}

/// Merges the sorted runs `[left, right_start)` and `[right_start, right_end]`.
fn merge<T, C>(
    slice: &mut [T],
    scratch: &mut [T],
    left: usize,
    right_start: usize,
    right_end: usize,
    compare: &C,
) where
    T: Clone,
    C: Compare<T> + ?Sized,
{
    let (mut l, mut r, mut out) = (left, right_start, left);

    while l < right_start && r <= right_end {
        // Ties go left.
        if compare.compare(&slice[r], &slice[l]) {
            scratch[out].clone_from(&slice[r]);
            r += 1;
        } else {
            scratch[out].clone_from(&slice[l]);
            l += 1;
        }
        out += 1;
    }

    if l < right_start {
        scratch[out..=right_end].clone_from_slice(&slice[l..right_start]);
    } else {
        scratch[out..=right_end].clone_from_slice(&slice[r..=right_end]);
    }

    slice[left..=right_end].clone_from_slice(&scratch[left..=right_end]);
}

impl<T> SortBy<T> for MergeSorter
where
    T: Clone,
{
    #[inline]
    fn sort_by<C>(&self, slice: &mut [T], compare: &C)
    where
        C: Compare<T> + ?Sized,
    {
        merge_sort_by(slice, compare)
    }
}

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        merge_sort_by(slice, &Less)
    }
}
