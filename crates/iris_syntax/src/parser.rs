//! Parser for the iris programming language
//!
//! Declarations, statements and types are parsed by recursive descent. Expressions are parsed by a Pratt
//! (precedence-climbing) loop driven by the binding ladder in [`iris_core::lang::operators::Binding`].
//!
//! Parsing is fail-fast: the first syntax error aborts the whole parse and is returned as a [`ParseError`].
//!
//! ## Examples
//!
//! ```rust
//! use iris_syntax::parser;
//! use iris_syntax::source::SourceContext;
//!
//! let mut ctx = SourceContext::from_text("fn main(): i32 { ret 42 }");
//! let module = parser::parse(&mut ctx).unwrap();
//! assert_eq!(module.decls.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{LexAnomaly, ParseError};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::source::{Interner, SourceContext, SourceRange};
use iris_core::lang::keywords::{self, KeywordId};
use iris_core::lang::operators::{self, Associativity, Binding, OperatorId};
use iris_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (shared privacy) without one large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
