use super::{GraphSink, NodeId};
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Graphviz digraph accumulated in memory
///
/// Node ids are handed out sequentially from 0 and printed as `n0`, `n1`, ...
pub struct DotGraph {
    config: RenderConfig,
    labels: Vec<String>,
    edges: Vec<(NodeId, NodeId)>,
}

impl DotGraph {
    /// Creates an empty graph rendered according to `config`
    pub fn new(config: RenderConfig) -> Self {
        DotGraph {
            config,
            labels: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of registered edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Export the graph as DOT source
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        dot.push_str("// AST\n");
        dot.push_str("digraph {\n");
        dot.push_str(&format!(
            "  graph [rankdir=\"{}\", splines=\"{}\", nodesep=\"{}\", ranksep=\"{}\"];\n",
            Self::escape_dot(&self.config.rankdir),
            Self::escape_dot(&self.config.splines),
            self.config.nodesep,
            self.config.ranksep
        ));

        for (idx, label) in self.labels.iter().enumerate() {
            dot.push_str(&format!(
                "  {} [label=\"{}\"];\n",
                NodeId(idx),
                Self::escape_dot(label)
            ));
        }
        for (from, to) in &self.edges {
            dot.push_str(&format!("  {} -> {};\n", from, to));
        }

        dot.push_str("}\n");
        dot
    }

    fn escape_dot(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
    }

    /// Run the layout engine over `source`, writing `target`
    fn run_layout(&self, source: &Path, target: &Path) -> Result<()> {
        let format = self.config.format.extension();
        tracing::debug!(
            binary = %self.config.dot_binary.display(),
            format,
            target = %target.display(),
            "running layout engine"
        );

        let output = Command::new(&self.config.dot_binary)
            .arg(format!("-T{}", format))
            .arg("-o")
            .arg(target)
            .arg(source)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                Error::rendering(format!(
                    "failed to run `{}`: {}",
                    self.config.dot_binary.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::rendering(format!(
                "`{}` exited with {}: {}",
                self.config.dot_binary.display(),
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

impl GraphSink for DotGraph {
    fn add_node(&mut self, label: &str) -> NodeId {
        self.labels.push(label.to_string());
        NodeId(self.labels.len() - 1)
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push((from, to));
    }

    fn render(&mut self) -> Result<PathBuf> {
        let source = self.config.dot_path();
        std::fs::write(&source, self.to_dot())?;

        if !self.config.format.needs_layout() {
            return Ok(source);
        }

        let target = self.config.artifact_path();
        self.run_layout(&source, &target)?;

        if self.config.cleanup {
            if let Err(e) = std::fs::remove_file(&source) {
                tracing::warn!("Failed to remove {}: {}", source.display(), e);
            }
        }
        Ok(target)
    }
}
