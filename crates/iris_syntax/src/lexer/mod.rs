//! Lexer for the iris programming language
//!
//! The lexer is layered:
//! - `scanner` - character cursor with line/column tracking
//! - `tokenizer` - turns characters into tokens, one per call
//! - `tokens` - token types (`TokenKind`, `Token`)
//!
//! [`Lexer`] sits on top and gives the parser arbitrary lookahead through a FIFO token buffer, so no token is ever
//! produced twice.

pub mod scanner;
pub mod tokenizer;
pub mod tokens;

use std::collections::VecDeque;

pub use scanner::Scanner;
pub use tokenizer::{Tokenizer, tokenize};
pub use tokens::{Token, TokenKind, classify_word};

use crate::diagnostics::LexAnomaly;

/// Number of tokens pulled from the tokenizer whenever the buffer runs short.
pub const BUFFER_FILL_SIZE: usize = 1024;

/// Buffered token stream with unbounded lookahead.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    tokenizer: Tokenizer<'a>,
    buffer: VecDeque<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::from_tokenizer(Tokenizer::new(text))
    }

    pub fn from_tokenizer(tokenizer: Tokenizer<'a>) -> Self {
        Self {
            tokenizer,
            buffer: VecDeque::with_capacity(BUFFER_FILL_SIZE),
        }
    }

    /// Token `amount` positions ahead of the current one (`peek(0)` is the current token).
    ///
    /// Looking past the end of input yields the end-of-file token.
    pub fn peek(&mut self, amount: usize) -> Token {
        if amount >= self.buffer.len() && !self.exhausted() {
            self.fill((amount + 1).max(BUFFER_FILL_SIZE));
        }
        match self.buffer.get(amount).or(self.buffer.back()) {
            Some(token) => *token,
            None => self.tokenizer.next_token(),
        }
    }

    pub fn current(&mut self) -> Token {
        self.peek(0)
    }

    /// Remove and return the current token.
    pub fn consume(&mut self) -> Token {
        let token = self.current();
        self.buffer.pop_front();
        token
    }

    pub fn is_eof(&mut self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    /// Lexical anomalies recorded by the tokenizer for the tokens buffered so far.
    pub fn anomalies(&self) -> &[LexAnomaly] {
        self.tokenizer.anomalies()
    }

    /// `true` once the end-of-file token has been buffered.
    fn exhausted(&self) -> bool {
        self.buffer.back().is_some_and(|t| t.kind == TokenKind::Eof)
    }

    /// Pull tokens until the buffer holds `target` of them or the end-of-file token arrives.
    fn fill(&mut self, target: usize) {
        let before = self.buffer.len();
        while self.buffer.len() < target {
            let token = self.tokenizer.next_token();
            self.buffer.push_back(token);
            if token.kind == TokenKind::Eof {
                break;
            }
        }
        tracing::trace!(pulled = self.buffer.len() - before, buffered = self.buffer.len(), "lexer buffer fill");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = r"
  fn main(): i32 {
    let a = 10
    let b = 20
    ret a + b
  }
";

    #[test]
    fn lexer_yields_tokenizer_stream() {
        let mut lexer = Lexer::new(PROGRAM);
        let mut tokenizer = Tokenizer::new(PROGRAM);
        assert!(!lexer.is_eof());

        while !lexer.is_eof() {
            assert_eq!(lexer.consume(), tokenizer.next_token());
        }
        assert_eq!(tokenizer.next_token().kind, TokenKind::Eof);
        assert!(lexer.is_eof());
    }

    #[test]
    fn peek_does_not_consume() {
        let mut lexer = Lexer::new("a b c");
        let third = lexer.peek(2);
        assert_eq!(third.literal("a b c"), "c");
        assert_eq!(lexer.current().literal("a b c"), "a");
        lexer.consume();
        assert_eq!(lexer.peek(1), third);
    }

    #[test]
    fn peek_past_end_is_eof() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.peek(5000).kind, TokenKind::Eof);
        assert_eq!(lexer.consume().kind, TokenKind::Ident);
        assert_eq!(lexer.consume().kind, TokenKind::Eof);
        assert!(lexer.is_eof());
        assert_eq!(lexer.consume().kind, TokenKind::Eof);
    }

    #[test]
    fn lookahead_beyond_one_batch() {
        let text = "x ".repeat(BUFFER_FILL_SIZE + 10);
        let mut lexer = Lexer::new(&text);
        let far = lexer.peek(BUFFER_FILL_SIZE + 5);
        assert_eq!(far.kind, TokenKind::Ident);
        assert_eq!(far.range.offset, (BUFFER_FILL_SIZE + 5) * 2);
        assert_eq!(lexer.peek(BUFFER_FILL_SIZE + 10).kind, TokenKind::Eof);
    }
}
