//! Property-based tests for the iris front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use iris::ast::{Decl, Expr, Stmt};
use iris::lang::{keywords, types};
use iris::lexer::{Lexer, TokenKind, tokenize};
use iris::parser::Parser;
use iris::{SourceContext, parse};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Identifiers that are neither keywords nor primitive type names.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,12}".prop_filter("Not reserved vocabulary", |s| {
        keywords::from_str(s).is_none() && types::from_str(s).is_none()
    })
}

/// Short well-formed function declarations returning a sum of their parameters.
fn simple_function_strategy() -> impl Strategy<Value = String> {
    (ident_strategy(), prop::collection::vec(ident_strategy(), 1..4)).prop_map(|(name, params)| {
        format!("fn {name}({}: i64): i64 {{ ret {} }}", params.join(", "), params.join(" + "))
    })
}

// =============================================================================
// Lexer Properties
// =============================================================================

proptest! {
    /// Property: the tokenizer accepts any input and ends with a single EOF token
    #[test]
    fn tokenize_never_panics(source in "\\PC{0,200}") {
        let (tokens, _) = tokenize(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
            prop_assert!(token.range.end() <= source.len());
        }
    }

    /// Property: once the lexer reaches the end it stays there
    #[test]
    fn eof_is_sticky(source in "[a-z0-9 +*(){}]{0,40}") {
        let mut lexer = Lexer::new(&source);
        while !lexer.is_eof() {
            lexer.consume();
        }
        for _ in 0..3 {
            prop_assert_eq!(lexer.consume().kind, TokenKind::Eof);
        }
    }

    /// Property: identifiers lex as a single identifier token
    #[test]
    fn identifiers_survive_lexing(ident in ident_strategy()) {
        let (tokens, anomalies) = tokenize(&ident);
        prop_assert!(anomalies.is_empty());
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Ident);
        prop_assert_eq!(tokens[0].literal(&ident), ident.as_str());
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Property: the parser returns a result for any input instead of panicking
    #[test]
    fn parse_never_panics(source in "\\PC{0,200}") {
        let mut ctx = SourceContext::from_text(source);
        let _ = parse(&mut ctx);
    }

    /// Property: token soup built from real vocabulary never panics either
    #[test]
    fn parse_token_soup_never_panics(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "fn", "struct", "let", "mut", "ret", "if", "else", "while", "x", "1", "2.5", "'c'",
                "\"s\"", "i32", "(", ")", "{", "}", "[", "]", ",", ":", ".", "+", "-", "*", "=", "==", "!",
            ]),
            0..60,
        )
    ) {
        let mut ctx = SourceContext::from_text(parts.join(" "));
        let _ = parse(&mut ctx);
    }

    /// Property: a lone identifier parses as a name expression covering it
    #[test]
    fn generated_identifiers_parse_as_names(ident in ident_strategy()) {
        let mut ctx = SourceContext::from_text(ident.clone());
        let expr = Parser::new(&mut ctx).parse_expr(iris::lang::operators::Binding::LOWEST).unwrap();
        prop_assert!(matches!(expr.node, Expr::Name(_)));
        prop_assert_eq!(ctx.literal(expr.range), ident.as_str());
    }

    /// Property: generated functions parse to one declaration returning their parameter sum
    #[test]
    fn generated_functions_parse(func in simple_function_strategy()) {
        let mut ctx = SourceContext::from_text(func.clone());
        let module = parse(&mut ctx).unwrap();
        prop_assert_eq!(module.decls.len(), 1);
        prop_assert_eq!(module.decls[0].range.size, func.len());
        let Decl::Function(function) = &module.decls[0].node else {
            panic!("expected a function");
        };
        prop_assert!(matches!(function.block.node.stmts[0].node, Stmt::Return(_)));
    }
}
