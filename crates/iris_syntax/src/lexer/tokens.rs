//! Token types for the iris tokenizer.
//!
//! The tokenizer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Type(PrimitiveTypeId)` for primitive type names
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - Tokens carry no text. Literal and identifier spellings are recovered from the source through the token range,
//!   so [`TokenKind`] is `Copy` and tokens compare structurally.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::source::SourceRange;
use iris_core::lang::keywords::{self, KeywordId};
use iris_core::lang::operators::{self, OperatorId};
use iris_core::lang::punctuation::{self, PunctuationId};
use iris_core::lang::types::{self, PrimitiveTypeId};

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Vocabulary (ID-based) ==========
    Keyword(KeywordId),
    Type(PrimitiveTypeId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Literals ==========
    Int,
    Float,
    Bool,
    Char,
    Str,

    // ========== Identifiers ==========
    Ident,

    // ========== Special ==========
    Eof,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            TokenKind::Type(id) => write!(f, "'{}'", types::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Int => f.write_str("integer literal"),
            TokenKind::Float => f.write_str("float literal"),
            TokenKind::Bool => f.write_str("boolean literal"),
            TokenKind::Char => f.write_str("character literal"),
            TokenKind::Str => f.write_str("string literal"),
            TokenKind::Ident => f.write_str("identifier"),
            TokenKind::Eof => f.write_str("end of file"),
            TokenKind::Unknown => f.write_str("unknown character"),
        }
    }
}

/// A token with its kind and source range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub range: SourceRange,
}

impl Token {
    pub fn new(kind: TokenKind, range: SourceRange) -> Self {
        Self { kind, range }
    }

    /// Source text of this token. Char and string literals exclude their quotes.
    pub fn literal<'s>(&self, text: &'s str) -> &'s str {
        self.range.literal(text)
    }
}

/// Classify an identifier-shaped word: keyword, boolean literal, primitive type or plain identifier.
///
/// This is the tokenizer's keyword table; it is derived from the `iris_core` registries so the two cannot drift.
pub fn classify_word(word: &str) -> TokenKind {
    if let Some(id) = keywords::from_str(word) {
        return match id {
            KeywordId::True | KeywordId::False => TokenKind::Bool,
            _ => TokenKind::Keyword(id),
        };
    }
    match types::from_str(word) {
        Some(id) => TokenKind::Type(id),
        None => TokenKind::Ident,
    }
}
