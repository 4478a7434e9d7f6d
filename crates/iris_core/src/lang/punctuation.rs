//! Punctuation vocabulary.
//!
//! Delimiters and separators that are not operators. Two of them also drive expression parsing: `(` opens a call
//! and `.` selects a member; their binding levels are recorded here.
//!
//! ## Examples
//! ```rust
//! use iris_core::lang::operators::Binding;
//! use iris_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("{"), Some(PunctuationId::LBrace));
//! assert_eq!(punctuation::info_for(PunctuationId::Dot).binding, Some(Binding::MemberSelect));
//! ```

use super::operators::Binding;
use super::registry::Since;

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// `,` and `:`.
    Separator,
    /// `.`
    Access,
}

/// Stable identifier for punctuation tokens.
///
/// ## Notes
/// - The discriminant order matches the order of [`PUNCTUATION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Dot,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    /// Level of the infix (led) rule this token starts, if any.
    pub binding: Option<Binding>,
    pub since: Since,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(
        PunctuationId::LParen,
        "(",
        PunctuationCategory::Delimiter,
        Some(Binding::Call),
    ),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter, None),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter, None),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter, None),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter, None),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter, None),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator, None),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator, None),
    info(
        PunctuationId::Dot,
        ".",
        PunctuationCategory::Access,
        Some(Binding::MemberSelect),
    ),
];

pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    category: PunctuationCategory,
    binding: Option<Binding>,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        binding,
        since: Since(0, 1),
    }
}
