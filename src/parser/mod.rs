//! Parse-tree builder
//!
//! Builds a [`Node`] tree out of the token stream produced by the lexer.

mod ast;
mod tree_builder;

pub use ast::{Node, PreOrder};
pub use tree_builder::TreeBuilder;

use crate::lexer::Token;

/// Builds the first top-level node of `tokens`, if any
pub fn parse(tokens: Vec<Token>) -> Option<Node> {
    TreeBuilder::new(tokens).parse()
}
