//! iris language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, primitive type names,
//! operators (with their binding power) and punctuation.
//!
//! The design goal is to keep stringly-typed checks out of the tokenizer and parser. Callers work with **stable IDs**
//! and look up spellings/metadata via registry tables.
//!
//! ## Examples
//! ```rust
//! use iris_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("ret"), Some(KeywordId::Ret));
//! assert_eq!(keywords::as_str(KeywordId::Ret), "ret");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
pub mod types;
