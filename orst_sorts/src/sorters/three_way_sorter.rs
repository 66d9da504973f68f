use std::cmp::Ordering;

use crate::sorters::Sorter;

/// A recursive three way bucket sort.
///
/// The middle element is taken as the pivot and every element is moved into one of three
/// buckets: smaller than, equal to, or larger than the pivot. The outer buckets are sorted
/// recursively and the three are concatenated. Runs of equal keys collapse into one bucket in a
/// single pass, which keeps duplicate heavy input fast, at the price of allocating three
/// vectors per recursion level. Ascending order under `Ord` only.
///
/// # Usage
///```
/// use orst_sorts::{three_way_sort, Sorter, ThreeWaySorter};
///
/// let mut items = vec![2, 1, 2, 1, 3];
/// three_way_sort(&mut items);
/// assert_eq!(items, [1, 1, 2, 2, 3]);
///
/// let mut slice = [5, 4, 3];
/// ThreeWaySorter.sort(&mut slice);
/// assert_eq!(slice, [3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreeWaySorter;

pub fn three_way_sort<T: Ord>(items: &mut Vec<T>) {
    if items.len() <= 1 {
        return;
    }

    let chosen = items.swap_remove(items.len() / 2);
    let mut smaller = Vec::new();
    let mut same = vec![];
    let mut larger = Vec::new();

    for item in items.drain(..) {
        match item.cmp(&chosen) {
            Ordering::Less => smaller.push(item),
            Ordering::Equal => same.push(item),
            Ordering::Greater => larger.push(item),
        }
    }
    same.push(chosen);

    three_way_sort(&mut smaller);
    three_way_sort(&mut larger);

    items.append(&mut smaller);
    items.append(&mut same);
    items.append(&mut larger);
}

impl<T> Sorter<T> for ThreeWaySorter
where
    T: Ord + Clone,
{
    fn sort(&self, slice: &mut [T]) {
        if slice.len() <= 1 {
            return;
        }
        let mut items = slice.to_vec();
        three_way_sort(&mut items);
        slice.clone_from_slice(&items);
    }
}
