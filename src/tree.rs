use std::fmt::{Debug, Display};

use log::debug;

use crate::{
    dot::print_dot,
    error::InvariantViolation,
    interval::Interval,
    iter::{ContainsPruner, PruningIter, RefIter},
    node::Node,
    Error,
};

/// An [`IntervalTree`] stores closed intervals `[low, high]`, answering whether
/// a query interval lies entirely within any stored interval.
///
/// Point queries are expressed with a single-point interval (for point `42`,
/// the interval `[42, 42]`), or [`IntervalTree::search_point()`].
///
/// # Read Optimised
///
/// This [`IntervalTree`] is backed by an augmented AVL tree. Each node records
/// the maximum upper bound of its subtree, which is used to prune entire
/// subtrees during lookups.
///
/// The internal tree structure is modified during inserts to ensure the tree
/// always remains balanced. This bound on the worst-case tree height maintains
/// a logarithmic worst-case lookup time complexity at the cost of constant-time
/// subtree rotations during insert operations.
///
/// # Ordering
///
/// An interval is placed in the left subtree of a node when its lower bound is
/// strictly less than the node's, and in the right subtree otherwise. Duplicate
/// intervals are stored as distinct entries, and the relative placement of
/// intervals sharing a lower bound is unspecified.
///
/// Once built, a tree is an immutable snapshot that may be shared between
/// readers.
#[derive(Debug, Clone)]
pub struct IntervalTree<R> {
    root: Option<Box<Node<R>>>,
    len: usize,
}

impl<R> Default for IntervalTree<R> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<R> IntervalTree<R> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of intervals stored in this tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree, which is 0 for an empty tree and 1 for a tree
    /// containing a single interval.
    pub fn height(&self) -> u8 {
        self.root.as_ref().map(|v| v.height()).unwrap_or_default()
    }

    /// Iterate over all intervals stored in this tree, ordered by lower bound.
    pub fn iter(&self) -> impl Iterator<Item = &Interval<R>> {
        RefIter::new(self.root.as_deref()).map(|v| v.interval())
    }

    /// Render the tree structure as a Graphviz `dot` digraph.
    pub fn to_dot(&self) -> String
    where
        R: Display,
    {
        print_dot(self.root.as_deref())
    }
}

impl<R> IntervalTree<R>
where
    R: Ord + Clone + Debug,
{
    /// Build a tree from a non-empty sequence of `(low, high)` bound pairs,
    /// inserted in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `intervals` is empty, and
    /// [`Error::InvalidInterval`] for the first pair with `low > high`.
    pub fn build<I>(intervals: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (R, R)>,
    {
        let mut t = Self::new();
        for (low, high) in intervals {
            t.insert(Interval::new(low, high)?);
        }

        if t.is_empty() {
            return Err(Error::EmptyInput);
        }

        debug!(
            "built interval tree with {} intervals, height {}",
            t.len(),
            t.height()
        );

        Ok(t)
    }

    /// Insert `interval` into the tree, rebalancing as necessary.
    pub fn insert(&mut self, interval: Interval<R>) {
        match self.root {
            Some(ref mut v) => v.insert(interval),
            None => self.root = Some(Box::new(Node::new(interval))),
        }
        self.len += 1;
    }

    /// Return a stored interval that contains `query`, if any.
    ///
    /// When more than one stored interval contains `query`, which of them is
    /// returned is unspecified. Use [`IntervalTree::iter_containing()`] to
    /// retrieve all of them.
    pub fn search(&self, query: &Interval<R>) -> Option<&Interval<R>> {
        self.root.as_ref().and_then(|v| v.search(query))
    }

    /// Return a stored interval that contains the point `v`, if any.
    pub fn search_point(&self, v: &R) -> Option<&Interval<R>> {
        self.search(&Interval::point(v.clone()))
    }

    /// Returns true if any stored interval contains the point `v`.
    pub fn contains_point(&self, v: &R) -> bool {
        self.search_point(v).is_some()
    }

    /// Iterate over all stored intervals that contain `query`, ordered by
    /// lower bound.
    pub fn iter_containing<'a>(
        &'a self,
        query: &'a Interval<R>,
    ) -> impl Iterator<Item = &'a Interval<R>> + 'a {
        PruningIter::new(self.root.as_deref(), query, ContainsPruner).map(|v| v.interval())
    }

    /// Recompute the height, subtree maximum and ordering of every node from
    /// scratch, returning the first node found that does not match its stored
    /// metadata.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        match self.root.as_deref() {
            Some(v) => v.check().map(|_| ()),
            None => Ok(()),
        }
    }

    /// Assert the BST, AVL and interval tree properties of every node.
    ///
    /// # Panics
    ///
    /// Panics with a description of the offending node if the tree is
    /// malformed, which indicates a bug in this crate.
    pub fn validate(&self) -> bool {
        if let Err(e) = self.check_invariants() {
            panic!("malformed interval tree: {e}");
        }
        true
    }
}
