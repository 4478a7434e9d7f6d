//! Shareable metadata for `iris_core::lang` registries.
//!
//! Every registry (keywords, types, operators, punctuation) is a `const` table of small `Copy` info structs. This
//! module holds the metadata types they have in common.
//!
//! ## Notes
//! - Metadata is meant for tooling, docs and diagnostics; enforcement of syntax rules still lives in the tokenizer
//!   and parser.

/// Language version a vocabulary item has been available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use iris_core::lang::registry::Since;
///
/// assert!(Since(0, 1) < Since(0, 2));
/// assert_eq!(Since(0, 1).to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - `Reserved` marks spellings the tokenizer recognizes but the parser does not yet give a rule (e.g. `++`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Reserved,
}

/// A small example snippet for documentation.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
