//! Diagram rendering
//!
//! A tree is fed to a [`GraphSink`] by a pre-order walk: every node is
//! registered before its children, and each child gets an edge from its
//! parent right after it is registered. [`DotGraph`] is the Graphviz sink.

mod dot;

pub use dot::DotGraph;

use crate::error::Result;
use crate::parser::Node;
use std::fmt;
use std::path::PathBuf;

/// Opaque identifier handed out by a [`GraphSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Receiver of diagram nodes and edges
pub trait GraphSink {
    /// Registers a node with the given label
    fn add_node(&mut self, label: &str) -> NodeId;

    /// Registers a directed edge
    fn add_edge(&mut self, from: NodeId, to: NodeId);

    /// Produces the artifact and returns where it was written
    fn render(&mut self) -> Result<PathBuf>;
}

/// Walks `root` in pre-order into `sink`, returning the number of nodes registered
///
/// Each node is registered before its children, and the edge from its parent
/// is added right after it; the walk keeps its own stack of pending nodes.
pub fn build_graph<S: GraphSink + ?Sized>(root: &Node, sink: &mut S) -> usize {
    let mut visited = 0;
    let mut pending: Vec<(&Node, Option<NodeId>)> = vec![(root, None)];

    while let Some((node, parent)) = pending.pop() {
        let id = sink.add_node(node.name());
        visited += 1;

        if let Some(parent) = parent {
            sink.add_edge(parent, id);
        }

        for child in node.children().iter().rev() {
            pending.push((child, Some(id)));
        }
    }

    visited
}
