use crate::{interval::Interval, node::Node};

pub(crate) trait PruningOracle<R> {
    /// Returns true when the subtree rooted at `subtree_root` may contain a
    /// match and should be descended into.
    fn visit_subtree(&self, subtree_root: &Node<R>, query: &Interval<R>) -> bool;

    /// Returns true when the right node and subtree rooted at `subtree_root`
    /// should be descended into and evaluated.
    fn visit_right(&self, subtree_root: &Node<R>, query: &Interval<R>) -> bool;

    /// Returns true if `n` satisfies the pruning logic and should be yielded to
    /// the caller.
    fn filter_yield(&self, n: &Node<R>, query: &Interval<R>) -> bool;
}

/// An [`Iterator`] that performs a depth-first, in-order walk of a subtree and
/// yields [`Node`] instances that match a pruning predicate.
#[derive(Debug)]
pub(crate) struct PruningIter<'a, R, T> {
    query: &'a Interval<R>,
    stack: Vec<&'a Node<R>>,
    pruner: T,
}

impl<'a, R, T> PruningIter<'a, R, T>
where
    T: PruningOracle<R>,
{
    pub(crate) fn new(root: Option<&'a Node<R>>, query: &'a Interval<R>, pruner: T) -> Self {
        let mut this = Self {
            stack: vec![],
            query,
            pruner,
        };

        // Descend down the left side of the tree, pushing all the internal
        // nodes onto the stack until the left-most leaf is reached.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<R>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            if !self.pruner.visit_subtree(v, self.query) {
                // Prune this subtree rooted at "v" from the search.
                break;
            }

            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, R, T> Iterator for PruningIter<'a, R, T>
where
    T: PruningOracle<R>,
{
    type Item = &'a Node<R>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.stack.pop()?;

            if !self.pruner.visit_right(v, self.query) {
                // Prune this node and the right subtree from the search.
                continue;
            }

            // Push the right subtree to be visited next.
            if let Some(right) = v.right() {
                self.push_subtree(right);
            }

            // Yield this node if it satisfies the pruning predicate.
            if self.pruner.filter_yield(v, self.query) {
                return Some(v);
            }
        }
    }
}
