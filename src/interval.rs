use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    ops::RangeInclusive,
};

use crate::Error;

/// A closed interval `[low, high]` with `low <= high`.
///
/// An [`Interval`] is ordered by the lower bound, and tie-broken with the upper
/// bound.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Interval<T> {
    low: T,
    high: T,
}

impl<T> Interval<T> {
    /// Construct the interval `[low, high]`.
    ///
    /// Returns [`Error::InvalidInterval`] if `low > high`.
    pub fn new(low: T, high: T) -> Result<Self, Error>
    where
        T: Ord + Debug,
    {
        if low > high {
            return Err(Error::InvalidInterval {
                low: format!("{low:?}"),
                high: format!("{high:?}"),
            });
        }
        Ok(Self { low, high })
    }

    /// Construct the single-point interval `[v, v]`.
    pub fn point(v: T) -> Self
    where
        T: Clone,
    {
        Self {
            low: v.clone(),
            high: v,
        }
    }

    pub fn low(&self) -> &T {
        &self.low
    }

    pub fn high(&self) -> &T {
        &self.high
    }

    /// Returns true if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Self) -> bool
    where
        T: Ord,
    {
        self.low <= other.low && other.high <= self.high
    }

    /// Returns true if `v` lies within `self`.
    pub fn contains_point(&self, v: &T) -> bool
    where
        T: Ord,
    {
        self.low <= *v && *v <= self.high
    }

    pub fn into_inner(self) -> (T, T) {
        (self.low, self.high)
    }
}

impl<T> PartialOrd for Interval<T>
where
    T: Ord + Eq,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Interval<T>
where
    T: Ord + Eq,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // The lower bound is the primary ordering value, falling back to the
        // upper bound when the lower bounds are equal.
        match self.low.cmp(&other.low) {
            Ordering::Equal => self.high.cmp(&other.high),
            v => v,
        }
    }
}

impl<T> Display for Interval<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl<T> TryFrom<(T, T)> for Interval<T>
where
    T: Ord + Debug,
{
    type Error = Error;

    fn try_from((low, high): (T, T)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for Interval<T>
where
    T: Ord + Debug,
{
    type Error = Error;

    fn try_from(value: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (low, high) = value.into_inner();
        Self::new(low, high)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::arbitrary_pair;

    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_invalid() {
        assert_eq!(
            Interval::new(5, 1),
            Err(Error::InvalidInterval {
                low: "5".to_string(),
                high: "1".to_string()
            })
        );
        assert!(Interval::<i32>::try_from(3..=2).is_err());
        assert!(Interval::<char>::try_from(('b', 'a')).is_err());

        // Degenerate intervals are valid.
        assert_eq!(Interval::new(4, 4).unwrap(), Interval::point(4));
    }

    #[test]
    fn test_display() {
        let i = Interval::new(15, 20).unwrap();
        assert_eq!(i.to_string(), "[15, 20]");
    }

    proptest! {
        #[test]
        fn prop_new(a in any::<u16>(), b in any::<u16>()) {
            match Interval::new(a, b) {
                Ok(v) => {
                    assert!(a <= b);
                    assert_eq!(v.into_inner(), (a, b));
                }
                Err(_) => assert!(a > b),
            }
        }

        #[test]
        fn prop_interval_ord(a in arbitrary_pair(), b in arbitrary_pair()) {
            let ia = Interval::<usize>::try_from(a).unwrap();
            let ib = Interval::<usize>::try_from(b).unwrap();

            let got = ia.cmp(&ib);

            if a.0 == b.0 {
                // If the lower bounds are equal, then the ordering is defined
                // by the upper bounds.
                assert_eq!(got, a.1.cmp(&b.1));
            } else {
                // Otherwise an Interval is ordered by the lower bounds.
                assert_eq!(got, a.0.cmp(&b.0));
            }
        }

        #[test]
        fn prop_contains(outer in arbitrary_pair(), inner in arbitrary_pair()) {
            let o = Interval::<usize>::try_from(outer).unwrap();
            let i = Interval::<usize>::try_from(inner).unwrap();

            let want = outer.0 <= inner.0 && inner.1 <= outer.1;
            assert_eq!(o.contains(&i), want);

            // A point is contained iff the degenerate interval is.
            assert_eq!(
                o.contains_point(&inner.0),
                o.contains(&Interval::point(inner.0)),
            );
        }
    }
}
