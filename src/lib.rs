#![forbid(unsafe_code)]
//! iris compiler front end
//!
//! Turns iris source text into a validated syntax tree. The work happens in two library crates:
//!
//! - `iris_core`: language vocabulary registries (keywords, primitive types, operators, punctuation)
//! - `iris_syntax`: source context, lexer, parser, AST, visitor, dump printers
//!
//! This crate adds the `irisc` command-line front end.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Contract violations**: `Scanner::peek` past the end of input panics; callers range-check first.

pub mod cli;

pub use iris_core::lang;
pub use iris_syntax::{ast, diagnostics, dump, lexer, parser, source, visit};
pub use iris_syntax::{LexAnomaly, ParseError, SourceContext, parse};
