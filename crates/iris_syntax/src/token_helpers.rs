//! Small predicates on [`TokenKind`].
//!
//! They keep `matches!(...)` noise out of the parser's productions.

use crate::lexer::TokenKind;
use iris_core::lang::keywords::KeywordId;
use iris_core::lang::punctuation::PunctuationId;

impl TokenKind {
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for int, float, bool, char and string literals.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::Bool | TokenKind::Char | TokenKind::Str
        )
    }

    /// Keywords that open a statement other than an expression statement.
    pub fn is_statement_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(KeywordId::Let | KeywordId::Mut | KeywordId::Ret | KeywordId::If | KeywordId::While)
        )
    }
}
