/*
Box-drawing rendering of the namespace through termtree.
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::{NamespaceTree, Node};

/// Label used for the root, which has no name of its own.
pub const ROOT_LABEL: &str = ".";

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

fn build_tree(label: &str, node: &Node) -> Tree<String> {
    let leaves: Vec<_> = node
        .children()
        .map(|(name, child)| build_tree(name, child))
        .collect();
    Tree::new(label.to_string()).with_leaves(leaves)
}

impl TreeDisplay for Node {
    fn to_tree_string(&self) -> Tree<String> {
        build_tree(ROOT_LABEL, self)
    }
}

impl TreeDisplay for NamespaceTree {
    #[instrument(level = "debug", skip_all)]
    fn to_tree_string(&self) -> Tree<String> {
        self.root().to_tree_string()
    }
}
