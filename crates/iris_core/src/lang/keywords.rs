//! Define the reserved keyword vocabulary for the iris language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories and examples.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `true` and `false` are registered here with [`KeywordCategory::Literal`]; the tokenizer turns them into boolean
//!   literal tokens instead of keyword tokens.
//! - Primitive type names (`i32`, `str`, ...) are *not* keywords; see [`crate::lang::types`].
//!
//! ## Examples
//! ```rust
//! use iris_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::category(KeywordId::True), KeywordCategory::Literal);
//! assert_eq!(keywords::from_str("While"), None);
//! ```

use super::registry::{Example, Since, Stability};

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The discriminant order matches the order of [`KEYWORDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Fn,
    Struct,

    // Bindings
    Let,
    Mut,

    // Control flow
    Ret,
    If,
    Else,
    While,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Binding,
    ControlFlow,
    Literal,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info_with_examples(
        KeywordId::Fn,
        "fn",
        KeywordCategory::Declaration,
        "Declare a function.",
        &[Example {
            code: "fn add(a, b: i32): i32 { ret a + b }",
            note: Some("Parameters sharing a type are grouped before the colon."),
        }],
    ),
    info_with_examples(
        KeywordId::Struct,
        "struct",
        KeywordCategory::Declaration,
        "Declare a struct type.",
        &[Example {
            code: "struct Point { x, y: f64 }",
            note: None,
        }],
    ),
    // Bindings
    info(
        KeywordId::Let,
        "let",
        KeywordCategory::Binding,
        "Introduce an immutable binding.",
    ),
    info(
        KeywordId::Mut,
        "mut",
        KeywordCategory::Binding,
        "Introduce a mutable binding.",
    ),
    // Control flow
    info(
        KeywordId::Ret,
        "ret",
        KeywordCategory::ControlFlow,
        "Return a value from the enclosing function.",
    ),
    info(
        KeywordId::If,
        "if",
        KeywordCategory::ControlFlow,
        "Conditionally execute a block.",
    ),
    info(
        KeywordId::Else,
        "else",
        KeywordCategory::ControlFlow,
        "Alternative block of an `if`.",
    ),
    info(
        KeywordId::While,
        "while",
        KeywordCategory::ControlFlow,
        "Repeat a block while a condition holds.",
    ),
    // Literals
    info(
        KeywordId::True,
        "true",
        KeywordCategory::Literal,
        "Boolean literal true.",
    ),
    info(
        KeywordId::False,
        "false",
        KeywordCategory::Literal,
        "Boolean literal false.",
    ),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the documentation category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Resolve a spelling to its keyword id, if reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    info_with_examples(id, canonical, category, description, &[])
}

const fn info_with_examples(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
    examples: &'static [Example],
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
        since: Since(0, 1),
        stability: Stability::Stable,
        examples,
    }
}
