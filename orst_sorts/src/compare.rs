//! Orderings the sorters are parameterized over.
//!
//! A comparator answers a single question: must `a` be placed before `b`? Ascending and
//! descending order are the two unit types [`Less`] and [`Greater`]; any closure of the shape
//! `Fn(&T, &T) -> bool` works as well.
//!
//! ```
//! use orst_sorts::compare::{is_sorted_by, Compare, Greater, Less};
//!
//! assert!(Less.compare(&1, &2));
//! assert!(Greater.compare(&2, &1));
//!
//! let by_len = |a: &&str, b: &&str| a.len() < b.len();
//! assert!(is_sorted_by(&["a", "bb", "ccc"], &by_len));
//! ```

/// A strict ordering predicate. `compare(a, b)` is true iff `a` must be placed before `b`.
///
/// The relation has to be a strict weak order (irreflexive, transitive, with incomparability
/// being an equivalence) for the whole duration of one sort. A comparator that breaks this
/// contract leaves the resulting order unspecified, but never makes a sorter read outside of
/// its slice or loop forever.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Ascending order: smallest element first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Descending order: largest element first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Returns true if no element of `slice` must be placed before its predecessor.
pub fn is_sorted_by<T, C>(slice: &[T], compare: &C) -> bool
where
    C: Compare<T> + ?Sized,
{
    slice
        .windows(2)
        .all(|pair| !compare.compare(&pair[1], &pair[0]))
}
