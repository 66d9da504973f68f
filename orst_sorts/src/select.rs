//! [Quickselect](https://en.wikipedia.org/wiki/Quickselect): the k-th smallest element without
//! sorting everything.

use crate::compare::Less;
use crate::error::{Error, Result};
use crate::partition::{partition, PivotStrategy, CUTOFF};
use crate::sorters::insertion_sorter::insertion_sort_by;

/// Places the `k`-th smallest element (1 is the minimum) at index `k - 1` and returns it.
///
/// Uses the same median-of-three partitioning as quicksort but only follows the side that
/// contains rank `k`. Afterwards nothing in front of index `k - 1` is larger and nothing behind
/// it is smaller; the slice is otherwise not sorted.
///
/// Fails with [`Error::InvalidRank`] when `k` is not within `1..=slice.len()`, without touching
/// the slice.
///
/// ```
/// use orst_sorts::quick_select;
///
/// let mut slice = [7, 2, 9, 4, 1];
/// assert_eq!(quick_select(&mut slice, 3), Ok(&4));
/// assert_eq!(slice[2], 4);
///
/// assert!(quick_select(&mut slice, 0).is_err());
/// assert!(quick_select(&mut slice, 6).is_err());
/// ```
pub fn quick_select<T>(slice: &mut [T], k: usize) -> Result<&T>
where
    T: Ord + Clone,
{
    let len = slice.len();
    if k == 0 || k > len {
        return Err(Error::InvalidRank { k, len });
    }

    let mut left = 0;
    let mut right = len - 1;
    loop {
        if left + CUTOFF > right {
            insertion_sort_by(&mut slice[left..=right], &Less);
            break;
        }

        let index = partition(slice, left, right, PivotStrategy::MedianOfThree, &Less);
        if k <= index {
            right = index - 1;
        } else if k > index + 1 {
            left = index + 1;
        } else {
            break;
        }
    }

    Ok(&slice[k - 1])
}
