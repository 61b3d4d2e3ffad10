//! Tree node produced by the tree builder
//!
//! Trees can be as deep as the input nests, so every walk over a [`Node`]
//! (queries, printing, comparison, drop) keeps its own explicit stack
//! instead of recursing.

use std::fmt;

/// A labeled node of a parse tree
///
/// Each node owns its children outright; the tree is built in a single
/// top-down pass and never modified afterwards.
pub struct Node {
    name: String,
    children: Vec<Node>,
}

impl Node {
    /// Creates a leaf node
    pub(crate) fn leaf(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "node names are never empty");
        Node {
            name,
            children: Vec::new(),
        }
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Label of this node
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in left-to-right source order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Longest root-to-leaf path, counted in nodes
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Pre-order iterator over this subtree
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

enum Emit<'a> {
    Tree(&'a Node, bool),
    Close,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Emit::Tree(self, false)];
        while let Some(item) = stack.pop() {
            let (node, spaced) = match item {
                Emit::Close => {
                    f.write_str(")")?;
                    continue;
                }
                Emit::Tree(node, spaced) => (node, spaced),
            };

            if spaced {
                f.write_str(" ")?;
            }
            if node.children.is_empty() {
                f.write_str(&node.name)?;
                continue;
            }
            write!(f, "({}", node.name)?;
            stack.push(Emit::Close);
            for child in node.children.iter().rev() {
                stack.push(Emit::Tree(child, true));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self)
    }
}

/// Structural equality: same labels in the same shape
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b))
                    if a.name == b.name && a.children.len() == b.children.len() => {}
                _ => return false,
            }
        }
    }
}

impl Eq for Node {}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Pre-order traversal of a [`Node`] subtree
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
