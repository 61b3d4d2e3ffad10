use super::ast::Node;
use crate::lexer::{Token, TokenKind};

/// Tree builder over a token sequence
///
/// Malformed fragments never fail the parse: stray closers are discarded,
/// unclosed forms are returned as they stand, and absence of a node is
/// reported as `None`. Only the first top-level form is built.
///
/// Forms still waiting for their `)` are kept on an explicit stack, so
/// nesting depth is bounded by memory rather than by the call stack.
pub struct TreeBuilder {
    tokens: Vec<Token>,
    current: usize,
}

/// What the token at the cursor begins
enum Start {
    Leaf(Node),
    Form(Node),
    Nothing,
}

impl TreeBuilder {
    /// Creates a new tree builder
    pub fn new(tokens: Vec<Token>) -> Self {
        TreeBuilder { tokens, current: 0 }
    }

    /// Builds the first top-level node, if any
    pub fn parse(&mut self) -> Option<Node> {
        self.parse_node()
    }

    /// Number of tokens not consumed so far
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.current)
    }

    fn parse_node(&mut self) -> Option<Node> {
        let mut open: Vec<Node> = Vec::new();

        loop {
            // The innermost open form ends at its `)` or at end of input
            if !open.is_empty() && (self.is_at_end() || self.check_close()) {
                let node = open.pop()?;
                if self.check_close() {
                    self.advance();
                } else {
                    tracing::debug!(name = node.name(), "form left unclosed at end of input");
                }
                match open.last_mut() {
                    Some(parent) => parent.push_child(node),
                    None => return Some(node),
                }
                continue;
            }

            match self.start_node() {
                Start::Form(node) => open.push(node),
                Start::Leaf(node) => match open.last_mut() {
                    Some(parent) => parent.push_child(node),
                    None => return Some(node),
                },
                Start::Nothing if open.is_empty() => return None,
                Start::Nothing => {}
            }
        }
    }

    /// Consume the start of a node; `( name` opens a form whose head token is
    /// taken literally as the name
    fn start_node(&mut self) -> Start {
        let Some(token) = self.advance() else {
            return Start::Nothing;
        };

        match &token.kind {
            TokenKind::Symbol(text) => return Start::Leaf(Node::leaf(text.as_str())),
            TokenKind::CloseParen => {
                tracing::debug!(
                    line = token.line,
                    column = token.column,
                    "discarding stray `)`"
                );
                return Start::Nothing;
            }
            TokenKind::OpenParen => {}
        }

        match self.advance() {
            Some(head) => Start::Form(Node::leaf(head.lexeme())),
            None => {
                tracing::debug!("input ends right after `(`");
                Start::Nothing
            }
        }
    }

    // Helper methods

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    fn check_close(&self) -> bool {
        matches!(self.peek(), Some(t) if t.kind == TokenKind::CloseParen)
    }
}
