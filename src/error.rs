use std::fmt::{self, Display, Formatter};

/// Errors returned when constructing or querying an
/// [`IntervalTree`](crate::IntervalTree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An interval was specified with a lower bound greater than its upper
    /// bound.
    ///
    /// The bounds are carried in their [`Debug`] rendering.
    InvalidInterval { low: String, high: String },

    /// [`IntervalTree::build()`](crate::IntervalTree::build) was called with
    /// no intervals.
    EmptyInput,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { low, high } => {
                write!(f, "invalid interval [{low}, {high}]: low bound exceeds high bound")
            }
            Self::EmptyInput => write!(f, "cannot build an interval tree from zero intervals"),
        }
    }
}

impl std::error::Error for Error {}

/// A structural invariant of the tree that does not hold.
///
/// Returned by [`IntervalTree::check_invariants()`]; a correct tree never
/// produces one.
///
/// [`IntervalTree::check_invariants()`]: crate::IntervalTree::check_invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The [`Debug`] rendering of the interval stored in the offending node.
    pub interval: String,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A left descendant has a lower bound greater than this node's.
    LeftOrdering,
    /// A right descendant has a lower bound less than this node's.
    RightOrdering,
    /// The stored height differs from the recomputed height.
    Height { stored: u8, want: u8 },
    /// The child subtree heights differ by more than 1.
    Balance { left: u8, right: u8 },
    /// The stored subtree max differs from the recomputed one.
    SubtreeMax { stored: String, want: String },
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "node with interval {}: ", self.interval)?;
        match &self.kind {
            ViolationKind::LeftOrdering => {
                write!(f, "left subtree contains a greater lower bound")
            }
            ViolationKind::RightOrdering => {
                write!(f, "right subtree contains a lesser lower bound")
            }
            ViolationKind::Height { stored, want } => {
                write!(f, "expected height {want}, has {stored}")
            }
            ViolationKind::Balance { left, right } => {
                write!(f, "unbalanced (left height {left}, right height {right})")
            }
            ViolationKind::SubtreeMax { stored, want } => {
                write!(f, "expected subtree max {want}, has {stored}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
