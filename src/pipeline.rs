//! End-to-end conversion: text → tokens → tree → diagram

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::lexer::{strip_input, SExprScanner};
use crate::parser::{Node, TreeBuilder};
use crate::render::{build_graph, DotGraph, GraphSink};
use std::path::PathBuf;

/// Strips `sentinel`, tokenizes and builds the tree
///
/// Fails with [`Error::EmptyInput`] when nothing is left after stripping and
/// with [`Error::EmptyOrInvalidTree`] when no root node could be built.
/// Top-level forms after the first one are dropped with a warning.
pub fn parse_tree(text: &str, sentinel: &str) -> Result<Node> {
    let stripped = strip_input(text, sentinel);
    if stripped.is_empty() {
        return Err(Error::EmptyInput);
    }

    let tokens = SExprScanner::new(&stripped).scan_tokens();
    let mut builder = TreeBuilder::new(tokens);
    let root = builder.parse().ok_or(Error::EmptyOrInvalidTree)?;

    let remaining = builder.remaining();
    if remaining > 0 {
        tracing::warn!(remaining, "ignoring tokens after the first top-level form");
    }

    Ok(root)
}

/// Feeds `root` to `sink` and renders it
pub fn render_tree<S: GraphSink + ?Sized>(root: &Node, sink: &mut S) -> Result<PathBuf> {
    let nodes = build_graph(root, sink);
    tracing::debug!(nodes, "graph built");
    sink.render()
}

/// Parses `text` and renders it with the Graphviz backend
pub fn run(text: &str, config: &RenderConfig) -> Result<PathBuf> {
    let root = parse_tree(text, &config.sentinel)?;
    let mut graph = DotGraph::new(config.clone());
    render_tree(&root, &mut graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::DEFAULT_SENTINEL;

    #[test]
    fn test_empty_input() {
        for text in ["", "   ", "\n<EOF>\n"] {
            assert!(matches!(
                parse_tree(text, DEFAULT_SENTINEL),
                Err(Error::EmptyInput)
            ));
        }
    }

    #[test]
    fn test_no_root() {
        for text in [")", ") (a)", "(", ") ) <EOF>"] {
            assert!(matches!(
                parse_tree(text, DEFAULT_SENTINEL),
                Err(Error::EmptyOrInvalidTree)
            ));
        }
    }

    #[test]
    fn test_parse_tree() {
        let root = parse_tree("(root (a) (b (c))) <EOF>", DEFAULT_SENTINEL).unwrap();
        assert_eq!(root.to_string(), "(root a (b c))");
    }

    #[test]
    fn test_trailing_forms_are_dropped() {
        let root = parse_tree("(a x) (b y)", DEFAULT_SENTINEL).unwrap();
        assert_eq!(root.to_string(), "(a x)");
    }
}
