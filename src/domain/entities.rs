//! Domain entities: core data structures

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A node of the namespace tree.
///
/// A node carries no payload: it is the set of its named children, each of
/// which is a node itself. Children live in an ordered map, so storage order
/// is ascending byte-wise name order at all times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    children: BTreeMap<String, Node>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a node from `(name, child)` pairs, e.g. for fixtures.
    pub fn with_children<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        Self {
            children: children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Child names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// `(name, child)` pairs in sorted order.
    pub fn children(&self) -> btree_map::Iter<'_, String, Node> {
        self.children.iter()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Insert or replace a child, returning the replaced subtree.
    pub(crate) fn insert(&mut self, name: String, node: Node) -> Option<Node> {
        self.children.insert(name, node)
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Node> {
        self.children.remove(name)
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Number of levels below this one (0 for a leaf).
    pub fn height(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.height())
            .max()
            .unwrap_or(0)
    }
}

/// Outcome of removing a child: its name and the detached subtree, or `None`
/// if no child by that name existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    pub name: String,
    pub node: Option<Node>,
}

impl Removed {
    pub fn is_present(&self) -> bool {
        self.node.is_some()
    }
}

/// What `create` and `move` do when the target name is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Discard the existing sibling subtree.
    #[default]
    Replace,
    /// Fail with `NameCollision` and leave the tree unchanged.
    Reject,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Replace => write!(f, "replace"),
            CollisionPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "replace" => Ok(CollisionPolicy::Replace),
            "reject" => Ok(CollisionPolicy::Reject),
            other => Err(format!(
                "unknown collision policy '{other}' (expected replace or reject)"
            )),
        }
    }
}
