use super::token::{Token, TokenKind};

/// Scanner for parenthesized parse-tree text
///
/// Scanning is total: every input, including the empty string, yields a
/// (possibly empty) token sequence.
pub struct SExprScanner {
    /// Source text as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Column where the current token starts
    start_column: usize,
}

impl SExprScanner {
    /// Creates a new scanner over already-stripped text
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_column: 1,
        }
    }

    /// Scans all tokens from the source and returns them as a vector
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_column = self.column;
            self.scan_token();
        }

        tracing::debug!(count = self.tokens.len(), "scanned tokens");
        std::mem::take(&mut self.tokens)
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::OpenParen),
            ')' => self.add_token(TokenKind::CloseParen),
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            c if c.is_whitespace() => {}
            _ => self.scan_symbol(),
        }
    }

    fn scan_symbol(&mut self) {
        while !self.is_at_end() && !Self::is_delimiter(self.peek()) {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        self.add_token(TokenKind::Symbol(text));
    }

    fn is_delimiter(c: char) -> bool {
        c == '(' || c == ')' || c.is_whitespace()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(kind, self.line, self.start_column));
    }
}
