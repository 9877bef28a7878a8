use tracing::{debug, instrument, trace, warn};

use crate::domain::{CollisionPolicy, DomainError, DomainResult, Node, NodePath, Removed};

/// In-memory namespace: a root node owning a strict tree of named children.
///
/// Every mutation goes through a path walk from the root. Child sets are
/// ordered maps, so sort order is established at write time and `find`,
/// [`iter`](Self::iter) and [`list`](Self::list) always observe sorted children.
#[derive(Debug, Clone, Default)]
pub struct NamespaceTree {
    root: Node,
    policy: CollisionPolicy,
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CollisionPolicy) -> Self {
        Self {
            root: Node::new(),
            policy,
        }
    }

    /// Wrap an existing node as the root.
    pub fn from_root(root: Node, policy: CollisionPolicy) -> Self {
        Self { root, policy }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    /// Resolve `path` to a node. The root path always resolves.
    ///
    /// Fails with [`DomainError::PathNotFound`] carrying the first missing
    /// segment; the walk stops there.
    #[instrument(level = "trace", skip_all, fields(path = %path))]
    pub fn find(&self, path: &NodePath) -> DomainResult<&Node> {
        self.walk(path.segments())
    }

    /// Create an empty node at `path`. The prefix must already exist.
    #[instrument(level = "debug", skip_all, fields(path = %path))]
    pub fn create(&mut self, path: &NodePath) -> DomainResult<()> {
        let (prefix, name) = path.split_last()?;
        self.try_attach(prefix, name, Node::new())
            .map_err(|(err, _)| err)
    }

    /// Detach the node at `path` together with its subtree.
    ///
    /// A missing final segment is not an error: the result reports it as
    /// not present. Only an unresolved prefix fails.
    #[instrument(level = "debug", skip_all, fields(path = %path))]
    pub fn delete(&mut self, path: &NodePath) -> DomainResult<Removed> {
        let (prefix, name) = path.split_last()?;
        let parent = self.walk_mut(prefix)?;
        let node = parent.remove(name);
        if node.is_none() {
            debug!("delete: {} not present", name);
        }
        Ok(Removed {
            name: name.to_string(),
            node,
        })
    }

    /// Relocate the subtree at `from` under the node at `to`, keeping its name.
    ///
    /// `to` may be the root. If the subtree cannot be attached it is put back
    /// where it was and the attach error is returned.
    #[instrument(level = "debug", skip_all, fields(from = %from, to = %to))]
    pub fn move_node(&mut self, from: &NodePath, to: &NodePath) -> DomainResult<()> {
        let (prefix, name) = from.split_last()?;
        let removed = self.delete(from)?;
        let Some(node) = removed.node else {
            return Err(DomainError::NodeNotFound(removed.name));
        };

        if let Err((err, node)) = self.try_attach(to.segments(), name, node) {
            warn!("move: cannot attach {} under '{}': {}, restoring", name, to, err);
            // only a child of the source parent was detached, so it still resolves
            if let Ok(parent) = self.walk_mut(prefix) {
                parent.insert(name.to_string(), node);
            }
            return Err(err);
        }
        Ok(())
    }

    /// Indented listing: one name per line, two spaces per level, pre-order.
    pub fn list(&self) -> String {
        let mut out = String::new();
        for entry in self.iter() {
            for _ in 0..entry.depth {
                out.push_str("  ");
            }
            out.push_str(entry.name);
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    /// Pre-order traversal below the root in sorted order.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(&self.root)
    }

    /// Number of levels below the root.
    pub fn depth(&self) -> usize {
        self.root.height()
    }

    /// Number of nodes, not counting the root.
    pub fn len(&self) -> usize {
        self.root.descendant_count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Paths of all childless nodes below the root, in pre-order.
    pub fn leaf_paths(&self) -> Vec<NodePath> {
        let mut leaves = Vec::new();
        collect_leaves(&self.root, &NodePath::root(), &mut leaves);
        leaves
    }

    fn walk(&self, segments: &[String]) -> DomainResult<&Node> {
        let mut current = &self.root;
        for segment in segments {
            trace!("walk: {}", segment);
            current = current
                .child(segment)
                .ok_or_else(|| DomainError::PathNotFound(segment.clone()))?;
        }
        Ok(current)
    }

    fn walk_mut(&mut self, segments: &[String]) -> DomainResult<&mut Node> {
        let mut current = &mut self.root;
        for segment in segments {
            trace!("walk_mut: {}", segment);
            current = current
                .child_mut(segment)
                .ok_or_else(|| DomainError::PathNotFound(segment.clone()))?;
        }
        Ok(current)
    }

    /// Insert `node` as `name` under `prefix`, handing the node back on failure.
    fn try_attach(
        &mut self,
        prefix: &[String],
        name: &str,
        node: Node,
    ) -> Result<(), (DomainError, Node)> {
        let policy = self.policy;
        let parent = match self.walk_mut(prefix) {
            Ok(parent) => parent,
            Err(err) => return Err((err, node)),
        };
        if parent.contains(name) {
            match policy {
                CollisionPolicy::Reject => {
                    return Err((DomainError::NameCollision(name.to_string()), node));
                }
                CollisionPolicy::Replace => debug!("attach: replacing existing {}", name),
            }
        }
        parent.insert(name.to_string(), node);
        Ok(())
    }
}

impl PartialEq for NamespaceTree {
    /// Trees are equal when they hold the same names in the same shape.
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for NamespaceTree {}

fn collect_leaves(node: &Node, path: &NodePath, leaves: &mut Vec<NodePath>) {
    for (name, child) in node.children() {
        let child_path = path.join(name.as_str());
        if child.is_leaf() {
            leaves.push(child_path);
        } else {
            collect_leaves(child, &child_path, leaves);
        }
    }
}

/// One step of a pre-order walk.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// 0 for children of the root.
    pub depth: usize,
    pub name: &'a str,
    pub node: &'a Node,
}

pub struct TreeIterator<'a> {
    stack: Vec<Entry<'a>>,
}

impl<'a> TreeIterator<'a> {
    fn new(root: &'a Node) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_children(root, 0);
        iter
    }

    fn push_children(&mut self, node: &'a Node, depth: usize) {
        // reversed so the smallest name is popped first
        for (name, child) in node.children().rev() {
            self.stack.push(Entry {
                depth,
                name: name.as_str(),
                node: child,
            });
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.push_children(entry.node, entry.depth + 1);
        Some(entry)
    }
}
