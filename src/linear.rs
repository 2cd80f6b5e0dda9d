//! Brute-force containment search over a slice of intervals.
//!
//! This is the reference the tree is checked against in tests and
//! benchmarks.

use crate::Interval;

/// Return the first interval in `intervals` containing `query`, if any.
pub fn linear_search<'a, R>(
    intervals: &'a [Interval<R>],
    query: &Interval<R>,
) -> Option<&'a Interval<R>>
where
    R: Ord,
{
    intervals.iter().find(|v| v.contains(query))
}

/// Return all intervals in `intervals` containing `query`, in slice order.
pub fn linear_search_all<'a, R>(
    intervals: &'a [Interval<R>],
    query: &'a Interval<R>,
) -> impl Iterator<Item = &'a Interval<R>> + 'a
where
    R: Ord,
{
    intervals.iter().filter(move |v| v.contains(query))
}
