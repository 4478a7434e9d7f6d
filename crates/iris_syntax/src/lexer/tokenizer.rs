//! Tokenizer: classifies runs of characters into tokens, one token per call.
//!
//! At every call, in priority order:
//! 1. skip whitespace and `#` line comments
//! 2. a digit starts a number literal (`12` or `12.5`)
//! 3. a letter or `_` starts a word: keyword, primitive type, boolean literal or identifier
//! 4. `'` and `"` start char and string literals (ranges exclude the quotes)
//! 5. punctuation and operators, longest match first (`<<=` before `<<` before `<`)
//! 6. anything else becomes [`TokenKind::Unknown`]
//!
//! Malformed input never stops tokenization: the token is still produced and a [`LexAnomaly`] is recorded.

use super::scanner::Scanner;
use super::tokens::{Token, TokenKind, classify_word};
use crate::diagnostics::{AnomalyKind, LexAnomaly};
use crate::source::SourceRange;
use iris_core::lang::operators::OperatorId;
use iris_core::lang::punctuation::PunctuationId;

/// Pull-based tokenizer over a source buffer.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    scanner: Scanner<'a>,
    anomalies: Vec<LexAnomaly>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            scanner: Scanner::new(text),
            anomalies: Vec::new(),
        }
    }

    /// Produce the next token.
    ///
    /// Once the input is exhausted every call returns an [`TokenKind::Eof`] token positioned just past the last
    /// character.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let Some(c) = self.scanner.lookahead(0) else {
            return Token::new(TokenKind::Eof, self.scanner.position);
        };

        if c.is_ascii_digit() {
            return self.read_number();
        }
        // Digits were handled above, so a word never starts with one.
        if is_word_char(c) {
            return self.read_word();
        }

        match c {
            '\'' => self.read_char(),
            '"' => self.read_string(),

            '(' => self.punct(PunctuationId::LParen),
            ')' => self.punct(PunctuationId::RParen),
            '[' => self.punct(PunctuationId::LBracket),
            ']' => self.punct(PunctuationId::RBracket),
            '{' => self.punct(PunctuationId::LBrace),
            '}' => self.punct(PunctuationId::RBrace),
            ',' => self.punct(PunctuationId::Comma),
            ':' => self.punct(PunctuationId::Colon),
            '.' => self.punct(PunctuationId::Dot),

            '+' => self.operator(
                OperatorId::Plus,
                &[("+", OperatorId::PlusPlus), ("=", OperatorId::PlusEq)],
            ),
            '-' => self.operator(
                OperatorId::Minus,
                &[("-", OperatorId::MinusMinus), ("=", OperatorId::MinusEq)],
            ),
            '*' => self.operator(OperatorId::Star, &[("=", OperatorId::StarEq)]),
            '/' => self.operator(OperatorId::Slash, &[("=", OperatorId::SlashEq)]),
            '%' => self.operator(OperatorId::Percent, &[("=", OperatorId::PercentEq)]),
            '<' => self.operator(
                OperatorId::Lt,
                &[
                    ("<=", OperatorId::ShlEq),
                    ("<", OperatorId::Shl),
                    ("=", OperatorId::LtEq),
                ],
            ),
            '>' => self.operator(
                OperatorId::Gt,
                &[
                    (">=", OperatorId::ShrEq),
                    (">", OperatorId::Shr),
                    ("=", OperatorId::GtEq),
                ],
            ),
            '&' => self.operator(
                OperatorId::Amp,
                &[
                    ("&=", OperatorId::AmpAmpEq),
                    ("&", OperatorId::AmpAmp),
                    ("=", OperatorId::AmpEq),
                ],
            ),
            '|' => self.operator(
                OperatorId::Pipe,
                &[
                    ("|=", OperatorId::PipePipeEq),
                    ("|", OperatorId::PipePipe),
                    ("=", OperatorId::PipeEq),
                ],
            ),
            '^' => self.operator(OperatorId::Caret, &[("=", OperatorId::CaretEq)]),
            '!' => self.operator(OperatorId::Bang, &[("=", OperatorId::NotEq)]),
            '=' => self.operator(OperatorId::Eq, &[("=", OperatorId::EqEq)]),

            _ => self.read_unknown(),
        }
    }

    /// Lexical anomalies recorded so far, in source order.
    pub fn anomalies(&self) -> &[LexAnomaly] {
        &self.anomalies
    }

    pub fn take_anomalies(&mut self) -> Vec<LexAnomaly> {
        std::mem::take(&mut self.anomalies)
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_trivia(&mut self) {
        loop {
            match self.scanner.lookahead(0) {
                Some(' ' | '\t' | '\r' | '\n') => self.scanner.advance(1),
                Some('#') => {
                    while let Some(c) = self.scanner.lookahead(0) {
                        if c == '\n' {
                            break;
                        }
                        self.scanner.advance(1);
                    }
                }
                _ => return,
            }
        }
    }

    // ========================================================================
    // Literals and words
    // ========================================================================

    fn read_number(&mut self) -> Token {
        let start = self.scanner.position;
        self.skip_digits();

        // `1.` without a following digit stays an integer; the dot becomes its own token.
        let fraction = self.scanner.lookahead(0) == Some('.')
            && self.scanner.lookahead(1).is_some_and(|c| c.is_ascii_digit());
        if !fraction {
            return Token::new(TokenKind::Int, self.range_from(start));
        }

        self.scanner.advance(1);
        self.skip_digits();
        Token::new(TokenKind::Float, self.range_from(start))
    }

    fn skip_digits(&mut self) {
        while self.scanner.lookahead(0).is_some_and(|c| c.is_ascii_digit()) {
            self.scanner.advance(1);
        }
    }

    fn read_word(&mut self) -> Token {
        let start = self.scanner.position;
        while self.scanner.lookahead(0).is_some_and(is_word_char) {
            self.scanner.advance(1);
        }
        let range = self.range_from(start);
        Token::new(classify_word(range.literal(self.scanner.text())), range)
    }

    fn read_char(&mut self) -> Token {
        let quote = self.scanner.position;
        self.scanner.advance(1);

        match self.scanner.lookahead(0) {
            None => {
                let body = self.range_from(self.scanner.position);
                self.report(AnomalyKind::UnterminatedChar, quote + body);
                Token::new(TokenKind::Char, body)
            }
            Some('\'') => {
                let body = self.range_from(self.scanner.position);
                self.scanner.advance(1);
                self.report(AnomalyKind::EmptyChar, self.range_from(quote));
                Token::new(TokenKind::Char, body)
            }
            Some(_) => {
                let start = self.scanner.position;
                self.scanner.advance(1);
                let body = self.range_from(start);
                if self.scanner.lookahead(0) == Some('\'') {
                    self.scanner.advance(1);
                } else {
                    self.report(AnomalyKind::UnterminatedChar, quote + body);
                }
                Token::new(TokenKind::Char, body)
            }
        }
    }

    fn read_string(&mut self) -> Token {
        let quote = self.scanner.position;
        self.scanner.advance(1);

        let start = self.scanner.position;
        while let Some(c) = self.scanner.lookahead(0) {
            if c == '"' || c == '\n' {
                break;
            }
            self.scanner.advance(1);
        }
        let body = self.range_from(start);

        if self.scanner.lookahead(0) == Some('"') {
            self.scanner.advance(1);
        } else {
            self.report(AnomalyKind::UnterminatedString, quote + body);
        }
        Token::new(TokenKind::Str, body)
    }

    fn read_unknown(&mut self) -> Token {
        let start = self.scanner.position;
        self.scanner.advance(1);
        let range = self.range_from(start);
        self.report(AnomalyKind::UnknownCharacter, range);
        Token::new(TokenKind::Unknown, range)
    }

    // ========================================================================
    // Operators and punctuation
    // ========================================================================

    fn punct(&mut self, id: PunctuationId) -> Token {
        self.read_token(TokenKind::Punctuation(id), 1)
    }

    /// Longest-match operator scan: `compounds` lists the characters that may follow the first one, longest first.
    fn operator(&mut self, simple: OperatorId, compounds: &[(&str, OperatorId)]) -> Token {
        for (suffix, id) in compounds {
            if self.follows(suffix) {
                return self.read_token(TokenKind::Operator(*id), 1 + suffix.chars().count());
            }
        }
        self.read_token(TokenKind::Operator(simple), 1)
    }

    /// `true` if the characters after the cursor spell `suffix`.
    fn follows(&self, suffix: &str) -> bool {
        suffix
            .chars()
            .enumerate()
            .all(|(i, c)| self.scanner.lookahead(i + 1) == Some(c))
    }

    fn read_token(&mut self, kind: TokenKind, length: usize) -> Token {
        let start = self.scanner.position;
        self.scanner.advance(length);
        Token::new(kind, self.range_from(start))
    }

    // ========================================================================
    // Ranges and anomalies
    // ========================================================================

    /// Range from `start` up to (excluding) the cursor.
    fn range_from(&self, start: SourceRange) -> SourceRange {
        let end = SourceRange {
            size: 0,
            ..self.scanner.position
        };
        if end.offset == start.offset { end } else { start + end }
    }

    fn report(&mut self, kind: AnomalyKind, range: SourceRange) {
        tracing::debug!(%kind, line = range.line, column = range.column, "lexical anomaly");
        self.anomalies.push(LexAnomaly::new(kind, range));
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize a whole buffer, including the trailing [`TokenKind::Eof`] token.
#[tracing::instrument(skip_all, fields(source_len = text.len()))]
pub fn tokenize(text: &str) -> (Vec<Token>, Vec<LexAnomaly>) {
    let mut tokenizer = Tokenizer::new(text);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token();
        tokens.push(token);
        if token.kind == TokenKind::Eof {
            break;
        }
    }
    (tokens, tokenizer.take_anomalies())
}
