//! Character cursor over the source buffer.
//!
//! The scanner is the only part of the front end that looks at raw text. It advances one character at a time and
//! keeps `position` in sync: byte offset, line and column of the character under the cursor.

use crate::source::SourceRange;

/// Character cursor with bounded lookahead.
///
/// ## Notes
/// - `position.size` is always 1: it describes the single character at the cursor.
/// - [`Scanner::peek`] past the end of the buffer is a caller bug and panics. Use [`Scanner::lookahead`] or
///   [`Scanner::is_eof_at`] when the next characters have not been range-checked yet.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    current: usize,
    pub position: SourceRange,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            current: 0,
            position: SourceRange::default(),
        }
    }

    /// Character `amount` positions ahead of the cursor.
    ///
    /// ## Panics
    /// - If the character lies beyond the end of the buffer.
    pub fn peek(&self, amount: usize) -> char {
        match self.lookahead(amount) {
            Some(c) => c,
            None => panic!(
                "Scanner::peek out of range: offset {} + {} is past the end of a {} byte buffer",
                self.current,
                amount,
                self.text.len()
            ),
        }
    }

    /// Character at the cursor.
    ///
    /// ## Panics
    /// - At end of input.
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// Character `amount` positions ahead, or `None` past the end.
    pub fn lookahead(&self, amount: usize) -> Option<char> {
        self.text[self.current..].chars().nth(amount)
    }

    /// Move the cursor forward by `amount` characters, stopping at the end of input.
    pub fn advance(&mut self, amount: usize) {
        for _ in 0..amount {
            let Some(c) = self.lookahead(0) else {
                return;
            };
            self.current += c.len_utf8();
            self.position.offset = self.current;
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
    }

    /// Return the character at the cursor and move past it.
    ///
    /// ## Panics
    /// - At end of input.
    pub fn consume(&mut self) -> char {
        let c = self.current();
        self.advance(1);
        c
    }

    pub fn is_eof(&self) -> bool {
        self.current >= self.text.len()
    }

    /// `true` if there is no character `amount` positions ahead.
    pub fn is_eof_at(&self, amount: usize) -> bool {
        self.lookahead(amount).is_none()
    }

    /// Byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.current
    }

    pub fn text(&self) -> &'a str {
        self.text
    }
}
