/// A single token from the tree text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Token { kind, line, column }
    }

    /// Text of the token as it appeared in the source
    pub fn lexeme(&self) -> &str {
        match &self.kind {
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Symbol(text) => text,
        }
    }
}

/// All token types in parse-tree text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Left parenthesis (
    OpenParen,
    /// Right parenthesis )
    CloseParen,
    /// Maximal run of non-whitespace, non-parenthesis characters
    Symbol(String),
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::OpenParen => write!(f, "("),
            TokenKind::CloseParen => write!(f, ")"),
            TokenKind::Symbol(text) => write!(f, "{}", text),
        }
    }
}
