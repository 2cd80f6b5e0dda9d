use crate::{interval::Interval, node::Node};

use super::pruning_iter::PruningOracle;

/// Selects the nodes whose interval contains the query interval.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContainsPruner;

impl<R> PruningOracle<R> for ContainsPruner
where
    R: Ord,
{
    fn visit_subtree(&self, subtree_root: &Node<R>, query: &Interval<R>) -> bool {
        // No upper bound in this subtree reaches the end of the query.
        subtree_root.subtree_max() >= query.high()
    }

    fn visit_right(&self, subtree_root: &Node<R>, query: &Interval<R>) -> bool {
        // All right descendants start at or after this node, so if this node
        // starts after the query none of them can contain it.
        subtree_root.interval().low() <= query.low()
    }

    fn filter_yield(&self, n: &Node<R>, query: &Interval<R>) -> bool {
        n.interval().contains(query)
    }
}
