//! Lexical analysis for parse-tree text
//!
//! Converts the text emitted by a compiler front-end into a flat stream of
//! `(`, `)` and symbol tokens.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::SExprScanner;
pub use token::{Token, TokenKind};

/// End-of-stream marker appended by ANTLR-style tree printers
pub const DEFAULT_SENTINEL: &str = "<EOF>";

/// Removes every occurrence of `sentinel` and trims surrounding whitespace
pub fn strip_input<'a>(text: &'a str, sentinel: &str) -> std::borrow::Cow<'a, str> {
    if sentinel.is_empty() || !text.contains(sentinel) {
        return std::borrow::Cow::Borrowed(text.trim());
    }
    std::borrow::Cow::Owned(text.replace(sentinel, "").trim().to_string())
}

/// Strips the default sentinel and tokenizes the remaining text
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with_sentinel(text, DEFAULT_SENTINEL)
}

/// Strips `sentinel` and tokenizes the remaining text
pub fn tokenize_with_sentinel(text: &str, sentinel: &str) -> Vec<Token> {
    let stripped = strip_input(text, sentinel);
    SExprScanner::new(&stripped).scan_tokens()
}
