//! # Astviz - S-expression parse trees as diagrams
//!
//! Compiler front-ends such as ANTLR print their parse trees as parenthesized
//! text:
//!
//! ```text
//! (program (statement (printStatement print ( (expression 1) ) ;)) <EOF>)
//! ```
//!
//! Astviz reads that text into a [`Node`] tree and hands it to a Graphviz
//! backend that draws one box per node and one edge per parent/child pair.
//!
//! ## Quick Start
//!
//! ```rust
//! use astviz::{tokenize, parse};
//!
//! let root = parse(tokenize("(root (a) (b (c))) <EOF>")).unwrap();
//! assert_eq!(root.name(), "root");
//! assert_eq!(root.children().len(), 2);
//! assert_eq!(root.children()[1].children()[0].name(), "c");
//! ```
//!
//! Rendering goes through any [`GraphSink`]; [`DotGraph`] writes DOT source
//! and runs `dot` for image formats:
//!
//! ```rust,no_run
//! use astviz::{pipeline, RenderConfig};
//!
//! # fn main() -> astviz::Result<()> {
//! let path = pipeline::run("(a (b) (c))", &RenderConfig::default())?;
//! println!("{}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Text → strip sentinel → Scanner → Tokens → TreeBuilder → Node → GraphSink → artifact
//! ```
//!
//! The tree builder is forgiving: stray `)` tokens are dropped, unclosed forms
//! are kept as they stand, and only the first top-level form is built.

/// Version of astviz
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod render;

// Re-export main types
pub use config::{OutputFormat, RenderConfig};
pub use error::{Error, Result};
pub use lexer::{strip_input, tokenize, SExprScanner, Token, TokenKind};
pub use parser::{parse, Node, TreeBuilder};
pub use render::{build_graph, DotGraph, GraphSink, NodeId};

/// Type alias for the S-expression scanner (lexer).
pub type Scanner = SExprScanner;
