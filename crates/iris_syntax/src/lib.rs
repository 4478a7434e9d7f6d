//! Syntax front end for the iris language: source context, lexer, parser, AST, diagnostics.
//!
//! Data flows strictly forward: [`SourceContext`] → scanner → tokenizer → lexer → parser → [`ast::Module`].
//!
//! ## Notes
//! - This crate is syntax-only: it does not resolve names or check types.
//! - Vocabulary identity (keywords/types/operators/punctuation) comes from the `iris_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use iris_syntax::source::SourceContext;
//!
//! let mut ctx = SourceContext::new("main.iris", "fn main() { ret 0 }");
//! let module = iris_syntax::parse(&mut ctx).unwrap();
//! assert_eq!(module.decls.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod dump;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod token_helpers;
pub mod visit;

pub use diagnostics::{LexAnomaly, ParseError};
pub use parser::parse;
pub use source::SourceContext;
