use crate::compare::{Compare, Less};
use crate::sorters::{SortBy, Sorter};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort builds the final sorted slice one item at a time. Every iteration takes the
/// first element of the unsorted tail, finds the place it belongs in the sorted prefix, shifts
/// everything behind that place one step to the right and drops the element into the gap.
///
/// It is stable: an element only moves in front of predecessors it must strictly precede. On
/// nearly sorted input it runs in linear time, which is why quicksort hands small subranges to
/// it.
///
/// With `binary: true` the place is found with a binary search over the sorted prefix instead
/// of a linear scan. That saves comparisons but not moves.
///
/// # Usage
///```
/// use orst_sorts::compare::Greater;
/// use orst_sorts::{InsertionSorter, SortBy, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter { binary: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///
/// InsertionSorter::default().sort_by(&mut slice, &Greater);
/// assert_eq!(slice, [5, 4, 3, 2, 1]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter {
    pub binary: bool,
}

/// Linear insertion sort of the whole slice under `compare`.
pub fn insertion_sort_by<T, C>(slice: &mut [T], compare: &C)
where
    C: Compare<T> + ?Sized,
{
    for unsorted in 1..slice.len() {
        let mut i = unsorted;
        while i > 0 && compare.compare(&slice[unsorted], &slice[i - 1]) {
            i -= 1;
        }
        slice[i..=unsorted].rotate_right(1);
    }
}

fn binary_insertion_sort_by<T, C>(slice: &mut [T], compare: &C)
where
    C: Compare<T> + ?Sized,
{
    for unsorted in 1..slice.len() {
        // First position whose element must come after the new one; equal elements stay in
        // front of it.
        let (sorted, rest) = slice.split_at(unsorted);
        let i = sorted.partition_point(|x| !compare.compare(&rest[0], x));
        slice[i..=unsorted].rotate_right(1);
    }
}

impl<T> SortBy<T> for InsertionSorter {
    #[inline]
    fn sort_by<C>(&self, slice: &mut [T], compare: &C)
    where
        C: Compare<T> + ?Sized,
    {
        if self.binary {
            binary_insertion_sort_by(slice, compare)
        } else {
            insertion_sort_by(slice, compare)
        }
    }
}

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        self.sort_by(slice, &Less)
    }
}
