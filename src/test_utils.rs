use proptest::prelude::*;

use crate::Interval;

const BOUND_MAX: usize = 100;

/// Generate arbitrary valid `(low, high)` bound pairs with values from
/// [1..[`BOUND_MAX`]].
pub(crate) fn arbitrary_pair() -> impl Strategy<Value = (usize, usize)> {
    (1..=BOUND_MAX, 1..=BOUND_MAX).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval<usize>> {
    arbitrary_pair().prop_map(|(low, high)| Interval::new(low, high).unwrap())
}

/// Generate a query that is usually (but not always) a single point.
pub(crate) fn arbitrary_query() -> impl Strategy<Value = Interval<usize>> {
    prop_oneof![
        3 => (1..=BOUND_MAX).prop_map(Interval::point),
        1 => arbitrary_interval(),
    ]
}
