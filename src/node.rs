use std::fmt::Debug;

use log::trace;

use crate::{
    error::{InvariantViolation, ViolationKind},
    interval::Interval,
};

#[derive(Debug, Clone)]
pub(crate) struct Node<R> {
    /// Child nodes pointers.
    left: Option<Box<Node<R>>>,
    right: Option<Box<Node<R>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an empty subtree a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    /// The maximum upper bound of all intervals for the subtree rooted at this
    /// [`Node`].
    subtree_max: R,

    interval: Interval<R>,
}

impl<R> Node<R> {
    pub(crate) fn new(interval: Interval<R>) -> Self
    where
        R: Clone,
    {
        Self {
            subtree_max: interval.high().clone(),
            interval,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `interval` into the subtree rooted at `self`, rebalancing the
    /// subtree on the way back up.
    ///
    /// A rotation may replace the node `self` points to, in which case `self`
    /// refers to the new subtree root on return.
    pub(crate) fn insert(self: &mut Box<Self>, interval: Interval<R>)
    where
        R: Ord + Clone,
    {
        // Intervals with a lower bound equal to this node's are placed in the
        // right subtree.
        let child = if interval.low() < self.interval.low() {
            &mut self.left
        } else {
            &mut self.right
        };

        match child {
            Some(v) => v.insert(interval),
            None => *child = Some(Box::new(Self::new(interval))),
        }

        update_height(self);
        update_subtree_max(self);
        rebalance(self);

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(balance(self).abs() <= 1);
    }

    /// Return the interval of a node in this subtree containing `query`, if
    /// any.
    ///
    /// Follows a single root-to-leaf path: the left subtree is chosen when its
    /// maximum upper bound reaches `query`'s upper bound, and the right
    /// subtree otherwise.
    pub(crate) fn search(&self, query: &Interval<R>) -> Option<&Interval<R>>
    where
        R: Ord,
    {
        let mut ptr = Some(self);

        while let Some(n) = ptr {
            if n.interval.contains(query) {
                return Some(&n.interval);
            }

            ptr = match n.left() {
                Some(l) if l.subtree_max() >= query.high() => Some(l),
                _ => n.right(),
            };
        }

        None
    }

    /// Recompute the height, subtree max and lower bound span of the subtree
    /// rooted at `self` from scratch, comparing them against the stored
    /// metadata.
    pub(crate) fn check(&self) -> Result<Summary<'_, R>, InvariantViolation>
    where
        R: Ord + Debug,
    {
        let left = self.left().map(Node::check).transpose()?;
        let right = self.right().map(Node::check).transpose()?;

        let violation = |kind| InvariantViolation {
            interval: format!("{:?}", self.interval),
            kind,
        };

        if left.as_ref().is_some_and(|l| l.max_low > self.interval.low()) {
            return Err(violation(ViolationKind::LeftOrdering));
        }
        if right.as_ref().is_some_and(|r| r.min_low < self.interval.low()) {
            return Err(violation(ViolationKind::RightOrdering));
        }

        let left_height = left.as_ref().map(|v| v.height).unwrap_or_default();
        let right_height = right.as_ref().map(|v| v.height).unwrap_or_default();

        let want = left_height.max(right_height) + 1;
        if self.height != want {
            return Err(violation(ViolationKind::Height {
                stored: self.height,
                want,
            }));
        }

        if left_height.abs_diff(right_height) > 1 {
            return Err(violation(ViolationKind::Balance {
                left: left_height,
                right: right_height,
            }));
        }

        let want_max = [left.as_ref(), right.as_ref()]
            .into_iter()
            .flatten()
            .map(|v| v.max)
            .fold(self.interval.high(), |acc, v| acc.max(v));
        if *want_max != self.subtree_max {
            return Err(violation(ViolationKind::SubtreeMax {
                stored: format!("{:?}", self.subtree_max),
                want: format!("{want_max:?}"),
            }));
        }

        Ok(Summary {
            height: want,
            max: want_max,
            min_low: left.map(|v| v.min_low).unwrap_or(self.interval.low()),
            max_low: right.map(|v| v.max_low).unwrap_or(self.interval.low()),
        })
    }

    pub(crate) fn interval(&self) -> &Interval<R> {
        &self.interval
    }

    pub(crate) fn subtree_max(&self) -> &R {
        &self.subtree_max
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }
}

/// Metadata of a subtree, recomputed by [`Node::check()`].
#[derive(Debug)]
pub(crate) struct Summary<'a, R> {
    height: u8,
    max: &'a R,
    min_low: &'a R,
    max_low: &'a R,
}

fn height<R>(n: Option<&Node<R>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<R>(n: &mut Node<R>) {
    n.height = height(n.left()).max(height(n.right())) + 1;
}

fn update_subtree_max<R>(n: &mut Node<R>)
where
    R: Ord + Clone,
{
    let new_max = n
        .left()
        .map(|v| v.subtree_max())
        .max(n.right().map(|v| v.subtree_max()))
        .map_or(n.interval().high(), |v| v.max(n.interval().high()))
        .clone();

    n.subtree_max = new_max;
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<R>(n: &Node<R>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Restore the AVL balance of the subtree rooted at `v` after an insert into
/// one of its children.
///
/// The height and subtree max of `v` must be up to date on entry.
fn rebalance<R>(v: &mut Box<Node<R>>)
where
    R: Ord + Clone,
{
    match balance(v) {
        // Left-left
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            trace!("rotate right at subtree height {}", v.height());
            rotate_right(v);
        }
        // Left-right
        (2..) => {
            trace!("rotate left-right at subtree height {}", v.height());
            if let Some(l) = v.left_mut() {
                rotate_left(l);
            }
            rotate_right(v);
        }
        // Right-right
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            trace!("rotate left at subtree height {}", v.height());
            rotate_left(v);
        }
        // Right-left
        (..=-2) => {
            trace!("rotate right-left at subtree height {}", v.height());
            if let Some(r) = v.right_mut() {
                rotate_right(r);
            }
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// A no-op if `x` has no right child.
fn rotate_left<R>(x: &mut Box<Node<R>>)
where
    R: Ord + Clone,
{
    let Some(mut p) = x.right.take() else {
        return;
    };
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);
    update_subtree_max(&mut p);

    x.left = Some(p);
    update_height(x);
    update_subtree_max(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// A no-op if `y` has no left child.
fn rotate_right<R>(y: &mut Box<Node<R>>)
where
    R: Ord + Clone,
{
    let Some(mut p) = y.left.take() else {
        return;
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);
    update_subtree_max(&mut p);

    y.right = Some(p);
    update_height(y);
    update_subtree_max(y);
}
