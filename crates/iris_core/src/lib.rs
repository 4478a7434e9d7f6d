//! Canonical language vocabulary for the iris compiler front end.
//!
//! This crate is intentionally small and dependency-free. It owns the tables that decide which spellings are
//! reserved words, primitive type names, operators and punctuation, together with the metadata the parser needs to
//! drive its precedence ladder.
//!
//! ## Notes
//!
//! - **No IO**, no global mutable state, and no syntax-tree types. The lexer and parser live in `iris_syntax`.
//! - Callers work with stable IDs (e.g. `KeywordId`, `OperatorId`) and look up spellings through the registries.

pub mod lang;
