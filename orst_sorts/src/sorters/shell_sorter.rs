use crate::sorters::Sorter;

/// An implementation of [Shellsort](https://en.wikipedia.org/wiki/Shellsort) using Shell's
/// original gaps `n/2, n/4, ..., 1`.
///
/// Each pass is an insertion sort over the elements `gap` apart, so far away inversions get
/// fixed with few moves before the final `gap == 1` pass. Only ascending order under `Ord` is
/// supported.
///
/// # Usage
///```
/// use orst_sorts::{ShellSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// ShellSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellSorter;

pub fn shell_sort<T: Ord>(slice: &mut [T]) {
    let mut gap = slice.len() / 2;
    while gap > 0 {
        for i in gap..slice.len() {
            let mut j = i;
            while j >= gap && slice[j] < slice[j - gap] {
                slice.swap(j, j - gap);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

impl<T> Sorter<T> for ShellSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        shell_sort(slice)
    }
}
