//! Structural queries and rendering over any component tree

use termtree::Tree;
use tracing::instrument;

use crate::domain::component::Component;

pub trait ComponentTreeExt {
    /// Outline of the tree for terminal display.
    fn to_tree(&self) -> Tree<String>;

    /// Number of levels; a lone node has depth 1.
    fn depth(&self) -> usize;

    /// Total number of nodes, this one included.
    fn node_count(&self) -> usize;

    /// Labels of terminal nodes in traversal order.
    fn leaf_labels(&self) -> Vec<String>;
}

impl<C: Component + ?Sized> ComponentTreeExt for C {
    #[instrument(level = "trace", skip(self))]
    fn to_tree(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children().iter().map(|c| c.to_tree()).collect();
        Tree::new(self.name().to_string()).with_leaves(leaves)
    }

    fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|c| c.depth())
            .max()
            .unwrap_or(0)
    }

    fn node_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }

    fn leaf_labels(&self) -> Vec<String> {
        if !self.is_composite() {
            return vec![self.name().to_string()];
        }
        self.children()
            .iter()
            .flat_map(|c| c.leaf_labels())
            .collect()
    }
}
