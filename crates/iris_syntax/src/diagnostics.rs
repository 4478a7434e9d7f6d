//! Diagnostics produced by the syntax front end.
//!
//! - [`LexAnomaly`]: a recoverable lexical problem. The tokenizer records it and keeps going.
//! - [`ParseError`]: the single fatal error of a failed parse.
//!
//! Both implement [`miette::Diagnostic`] so the CLI can render them against the source text.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::source::SourceRange;

/// The kind of lexical anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnomalyKind {
    #[error("unknown character")]
    UnknownCharacter,

    #[error("unterminated character literal")]
    UnterminatedChar,

    #[error("empty character literal")]
    EmptyChar,

    #[error("unterminated string literal")]
    UnterminatedString,
}

/// A lexical anomaly: the token was still produced, but the input is malformed at `range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(iris::lex), severity(Warning))]
pub struct LexAnomaly {
    pub kind: AnomalyKind,
    #[label("here")]
    pub range: SourceRange,
}

impl LexAnomaly {
    pub fn new(kind: AnomalyKind, range: SourceRange) -> Self {
        Self { kind, range }
    }
}

/// Fatal syntax error.
///
/// Carries the offending range, the source text at that range and a message such as `"expected expression"`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("line {}, column {}: {message}, found '{literal}'", .range.line, .range.column)]
#[diagnostic(code(iris::syntax))]
pub struct ParseError {
    pub message: String,
    pub literal: String,
    pub range: SourceRange,
    /// `range` clamped to the source buffer, for rendering.
    #[label("here")]
    pub span: SourceSpan,
}

impl ParseError {
    pub fn new(message: impl Into<String>, range: SourceRange, text: &str) -> Self {
        Self {
            message: message.into(),
            literal: range.literal(text).to_string(),
            range,
            span: range.clamp_to(text.len()).into(),
        }
    }
}
