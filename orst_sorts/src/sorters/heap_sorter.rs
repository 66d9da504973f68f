use crate::compare::{Compare, Less};
use crate::sorters::{SortBy, Sorter};

/// An implementation of [Heapsort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use orst_sorts::{HeapSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Algorithm
///
/// The slice is first rearranged into a binary max-heap in place, "max" meaning the element
/// that sorts last under the comparator. The root is then swapped with the last element of the
/// heap, the heap shrinks by one, and the new root is sifted down to restore the heap property.
/// Repeating this fills the slice from the back. O(n log n) in every case, not stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSorter;

/// Moves `heap[node]` down until neither child must be placed after it.
fn sift_down<T, C>(heap: &mut [T], mut node: usize, compare: &C)
where
    C: Compare<T> + ?Sized,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= heap.len() {
            break;
        }
        if child + 1 < heap.len() && compare.compare(&heap[child], &heap[child + 1]) {
            child += 1;
        }
        if !compare.compare(&heap[node], &heap[child]) {
            break;
        }
        heap.swap(node, child);
        node = child;
    }
}

pub fn heap_sort_by<T, C>(slice: &mut [T], compare: &C)
where
    C: Compare<T> + ?Sized,
{
    for node in (0..slice.len() / 2).rev() {
        sift_down(slice, node, compare);
    }
    for end in (1..slice.len()).rev() {
        slice.swap(0, end);
        sift_down(&mut slice[..end], 0, compare);
    }
}

impl<T> SortBy<T> for HeapSorter {
    #[inline]
    fn sort_by<C>(&self, slice: &mut [T], compare: &C)
    where
        C: Compare<T> + ?Sized,
    {
        heap_sort_by(slice, compare)
    }
}

impl<T> Sorter<T> for HeapSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        heap_sort_by(slice, &Less)
    }
}
