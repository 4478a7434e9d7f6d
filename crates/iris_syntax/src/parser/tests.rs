#[cfg(test)]
/// Parser unit tests.
///
/// Expression shapes are checked through the fully parenthesised rendering from `crate::dump::to_sexpr`.
mod tests {
    use super::*;
    use crate::dump::to_sexpr;

    /// Parse `source` as one complete expression and render it.
    fn sexpr(source: &str) -> String {
        let mut ctx = SourceContext::from_text(source);
        let mut parser = Parser::new(&mut ctx);
        let expr = parser
            .parse_expr(Binding::LOWEST)
            .unwrap_or_else(|err| panic!("{source:?}: {err}"));
        assert!(parser.lexer.is_eof(), "{source:?} was not fully consumed");
        to_sexpr(&expr, ctx.interner())
    }

    fn expr_error(source: &str) -> ParseError {
        let mut ctx = SourceContext::from_text(source);
        Parser::new(&mut ctx)
            .parse_expr(Binding::LOWEST)
            .expect_err("expression should not parse")
    }

    fn parse_str(source: &str) -> Result<Module, ParseError> {
        let mut ctx = SourceContext::from_text(source);
        parse(&mut ctx)
    }

    fn block(source: &str) -> (SourceContext, Spanned<Block>) {
        let mut ctx = SourceContext::from_text(source);
        let block = Parser::new(&mut ctx).parse_block().unwrap();
        (ctx, block)
    }

    // ========================================================================
    // Precedence & associativity
    // ========================================================================

    #[test]
    fn test_precedence() {
        assert_eq!(sexpr("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(sexpr("a * b(c)"), "(a * (b(c)))");
        assert_eq!(sexpr("a.b(c)"), "((a.b)(c))");
        assert_eq!(sexpr("a & b | c"), "(a & (b | c))");
        assert_eq!(sexpr("a || b && c"), "(a || (b && c))");
        assert_eq!(sexpr("a == b < c"), "(a == (b < c))");
        assert_eq!(sexpr("a < b << c"), "(a < (b << c))");
        assert_eq!(sexpr("a << b + c"), "(a << (b + c))");
        assert_eq!(sexpr("a ^ b | c & d"), "((a ^ (b | c)) & d)");
    }

    #[test]
    fn test_unary_binding() {
        assert_eq!(sexpr("!a.b"), "(!(a.b))");
        assert_eq!(sexpr("-a * b"), "((-a) * b)");
        assert_eq!(sexpr("-a + b"), "((-a) + b)");
        assert_eq!(sexpr("a + -b"), "(a + (-b))");
        assert_eq!(sexpr("!!a"), "(!(!a))");
        assert_eq!(sexpr("-f(x)"), "(-(f(x)))");
    }

    #[test]
    fn test_left_associativity() {
        for op in ["+", "-", "*", "/", "%", "&", "|", "^", "<<", ">>", "&&", "||"] {
            let source = format!("a {op} b {op} c");
            assert_eq!(sexpr(&source), format!("((a {op} b) {op} c)"), "operator {op}");
        }
        assert_eq!(sexpr("a.b.c"), "((a.b).c)");
        assert_eq!(sexpr("f(a)(b)"), "((f(a))(b))");
    }

    #[test]
    fn test_right_associativity() {
        assert_eq!(sexpr("a = b = c"), "(a = (b = c))");
        assert_eq!(sexpr("a = b + c"), "(a = (b + c))");
        assert_eq!(sexpr("a.b = c"), "((a.b) = c)");
    }

    #[test]
    fn test_call_arguments() {
        assert_eq!(sexpr("f()"), "(f())");
        assert_eq!(sexpr("f(1, a + b, g(2))"), "(f(1, (a + b), (g(2))))");
        assert_eq!(sexpr("f(-1, !x)"), "(f((-1), (!x)))");
    }

    #[test]
    fn test_literals() {
        assert_eq!(sexpr("18446744073709551615"), "18446744073709551615");
        assert_eq!(sexpr("3.25"), "3.25");
        assert_eq!(sexpr("true"), "true");
        assert_eq!(sexpr("false"), "false");
        assert_eq!(sexpr("'x'"), "'x'");
        assert_eq!(sexpr("\"hi there\""), "\"hi there\"");
    }

    // ========================================================================
    // Ranges
    // ========================================================================

    #[test]
    fn test_expression_ranges_cover_children() {
        let mut ctx = SourceContext::from_text("x + f(a, b)");
        let expr = Parser::new(&mut ctx).parse_expr(Binding::LOWEST).unwrap();
        assert_eq!(expr.range, SourceRange::new(0, 11, 1, 1));
        let Expr::Binary(left, op, right) = &expr.node else {
            panic!("expected binary, got {:?}", expr.node);
        };
        assert_eq!(ctx.literal(left.range), "x");
        assert_eq!(ctx.literal(op.range), "+");
        assert_eq!(ctx.literal(right.range), "f(a, b)");
    }

    #[test]
    fn test_unary_range_starts_at_operator() {
        let mut ctx = SourceContext::from_text("  -value");
        let expr = Parser::new(&mut ctx).parse_expr(Binding::LOWEST).unwrap();
        assert_eq!(expr.range, SourceRange::new(2, 6, 1, 3));
    }

    #[test]
    fn test_quoted_values_include_quotes() {
        let mut ctx = SourceContext::from_text("f('c', \"str\")");
        let expr = Parser::new(&mut ctx).parse_expr(Binding::LOWEST).unwrap();
        let Expr::Call(_, args) = &expr.node else {
            panic!("expected call, got {:?}", expr.node);
        };
        assert_eq!(args[0].range, SourceRange::new(2, 3, 1, 3));
        assert_eq!(ctx.literal(args[1].range), "\"str\"");

        // An unterminated string stops at the end of the line.
        let mut ctx = SourceContext::from_text("\"open\n");
        let expr = Parser::new(&mut ctx).parse_expr(Binding::LOWEST).unwrap();
        assert_eq!(ctx.literal(expr.range), "\"open");
    }

    #[test]
    fn test_block_statements() {
        let source = "{let a = 10 mut b = 10 + 20 a = a + b + 10 ret a + b}";
        let (ctx, block) = block(source);
        assert_eq!(block.range, SourceRange::new(0, 53, 1, 1));

        let stmts = &block.node.stmts;
        assert_eq!(stmts.len(), 4);
        assert!(matches!(stmts[0].node, Stmt::Let { .. }));
        assert!(matches!(stmts[1].node, Stmt::Mut { .. }));
        assert!(matches!(&stmts[2].node, Stmt::Expr(e) if matches!(e.node, Expr::Assign(..))));
        assert!(matches!(stmts[3].node, Stmt::Return(_)));

        assert_eq!(stmts[0].range, SourceRange::new(1, 10, 1, 2));
        assert_eq!(stmts[1].range, SourceRange::new(12, 15, 1, 13));
        assert_eq!(stmts[2].range, SourceRange::new(28, 14, 1, 29));
        assert_eq!(stmts[3].range, SourceRange::new(43, 9, 1, 44));

        let literals: Vec<&str> = stmts.iter().map(|s| ctx.literal(s.range)).collect();
        assert_eq!(literals, ["let a = 10", "mut b = 10 + 20", "a = a + b + 10", "ret a + b"]);
        assert_eq!(
            to_sexpr(&block, ctx.interner()),
            "{let a = 10 mut b = (10 + 20) (a = ((a + b) + 10)) ret (a + b)}"
        );
    }

    #[test]
    fn test_if_else_and_while_ranges() {
        let source = "{if a { b } else { c }\nwhile d { }}";
        let (ctx, block) = block(source);
        let stmts = &block.node.stmts;
        assert_eq!(ctx.literal(stmts[0].range), "if a { b } else { c }");
        assert_eq!(ctx.literal(stmts[1].range), "while d { }");
        assert_eq!((stmts[1].range.line, stmts[1].range.column), (2, 1));

        let Stmt::IfElse { then, orelse } = &stmts[0].node else {
            panic!("expected if/else");
        };
        assert_eq!(ctx.literal(then.range), "if a { b }");
        assert_eq!(orelse.as_ref().map(|e| ctx.literal(e.range)), Some("else { c }"));
    }

    #[test]
    fn test_identifiers_are_interned() {
        let (ctx, block) = block("{let x = x + y}");
        let Stmt::Let { identifier, expr } = &block.node.stmts[0].node else {
            panic!("expected let");
        };
        let Expr::Binary(left, _, right) = &expr.node else {
            panic!("expected binary");
        };
        let (Expr::Name(x), Expr::Name(y)) = (&left.node, &right.node) else {
            panic!("expected names");
        };
        assert_eq!(identifier, x);
        assert_ne!(identifier.range, x.range);
        assert_ne!(x, y);
        assert_eq!(ctx.resolve(x.symbol), "x");
        assert_eq!(ctx.interner().len(), 2);
    }

    // ========================================================================
    // Declarations & types
    // ========================================================================

    #[test]
    fn test_parse_function() {
        let source = "fn add(a, b: i32, s: str): i64 {\n  ret a + b\n}";
        let module = parse_str(source).unwrap();
        assert_eq!(module.decls.len(), 1);
        let Decl::Function(function) = &module.decls[0].node else {
            panic!("expected function");
        };
        let signature = &function.signature.node;
        assert_eq!(signature.params.len(), 2);
        assert_eq!(signature.params[0].node.identifiers.len(), 2);
        assert_eq!(signature.params[0].range, SourceRange::new(7, 9, 1, 8));
        assert_eq!(signature.params[1].node.ty.node, Type::Basic(BasicTypeKind::Str));
        assert_eq!(
            signature.return_type.as_ref().map(|t| &t.node),
            Some(&Type::Basic(BasicTypeKind::Int64))
        );
        assert_eq!(&source[..function.signature.range.end()], "fn add(a, b: i32, s: str): i64");
        assert_eq!(module.decls[0].range, SourceRange::new(0, source.len(), 1, 1));
    }

    #[test]
    fn test_parse_function_without_params_or_return_type() {
        let module = parse_str("fn main() {}").unwrap();
        let Decl::Function(function) = &module.decls[0].node else {
            panic!("expected function");
        };
        assert!(function.signature.node.params.is_empty());
        assert!(function.signature.node.return_type.is_none());
        assert!(function.block.node.stmts.is_empty());
        assert_eq!(function.signature.range, SourceRange::new(0, 9, 1, 1));
    }

    #[test]
    fn test_parse_struct() {
        let source = "struct Line { from, to: Point, weight: f32 }";
        let module = parse_str(source).unwrap();
        let Decl::Struct(decl) = &module.decls[0].node else {
            panic!("expected struct");
        };
        assert_eq!(decl.fields.len(), 2);
        assert!(matches!(decl.fields[0].node.ty.node, Type::Name(_)));
        assert_eq!(module.decls[0].range, SourceRange::new(0, source.len(), 1, 1));
    }

    #[test]
    fn test_parse_empty_struct_and_module() {
        assert!(parse_str("").unwrap().decls.is_empty());
        assert!(parse_str("  # only a comment\n").unwrap().decls.is_empty());
        let module = parse_str("struct Unit {}").unwrap();
        assert!(matches!(&module.decls[0].node, Decl::Struct(s) if s.fields.is_empty()));
    }

    #[test]
    fn test_parse_array_types() {
        let mut ctx = SourceContext::from_text("[[u8, 4], 16]");
        let ty = Parser::new(&mut ctx).parse_type().unwrap();
        assert_eq!(ty.range, SourceRange::new(0, 13, 1, 1));
        let Type::Array(inner, 16) = &ty.node else {
            panic!("expected array of 16, got {:?}", ty.node);
        };
        let element = Spanned::new(Type::Basic(BasicTypeKind::UInt8), SourceRange::new(2, 2, 1, 3));
        assert_eq!(inner.node, Type::Array(Box::new(element), 4));
    }

    // ========================================================================
    // Errors
    // ========================================================================

    #[test]
    fn test_missing_rhs_fails_at_eof() {
        let err = expr_error("a = ");
        assert_eq!(err.message, "expected expression");
        assert_eq!((err.range.line, err.range.column), (1, 5));
        assert_eq!(err.range.offset, 4);
        assert_eq!(err.literal, "");
    }

    #[test]
    fn test_missing_lhs_fails_at_start() {
        let err = expr_error("= b");
        assert_eq!(err.message, "expected expression");
        assert_eq!((err.range.line, err.range.column), (1, 1));
        assert_eq!(err.literal, "=");
    }

    #[test]
    fn test_unexpected_token_message() {
        let err = parse_str("fn main( {}").unwrap_err();
        assert_eq!(err.message, "unexpected token '{' expected ')'");
        assert_eq!(err.range.column, 10);

        let err = parse_str("fn main() { let = 1 }").unwrap_err();
        assert_eq!(err.message, "unexpected token '=' expected identifier");
    }

    #[test]
    fn test_declaration_errors() {
        let err = parse_str("let a = 1").unwrap_err();
        assert_eq!(err.message, "expected declaration");
        assert_eq!(err.literal, "let");

        let err = parse_str("struct S { x }").unwrap_err();
        assert_eq!(err.message, "unexpected token '}' expected ':'");

        let err = parse_str("struct S { x: 5 }").unwrap_err();
        assert_eq!(err.message, "expected type");

        let err = parse_str("fn f(, a: i32) {}").unwrap_err();
        assert_eq!(err.message, "unexpected token ',' expected ')'");

        let err = parse_str("fn f(a: i32,) {}").unwrap_err();
        assert_eq!(err.message, "expected identifier");
    }

    #[test]
    fn test_integer_out_of_range() {
        let err = expr_error("18446744073709551616");
        assert_eq!(err.message, "integer literal out of range");
        assert_eq!(err.range.size, 20);
    }

    #[test]
    fn test_unknown_character_is_not_an_expression() {
        let mut ctx = SourceContext::from_text("fn f() { a @ b }");
        let mut parser = Parser::new(&mut ctx);
        let err = parser.parse_module().unwrap_err();
        assert_eq!(err.message, "unexpected token unknown character expected '}'");
        assert_eq!(err.literal, "@");
        assert_eq!(parser.anomalies().len(), 1);
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let source = format!("fn f() {{ ret {}a }}", "- ".repeat(10_000));
        let err = parse_str(&source).unwrap_err();
        assert_eq!(err.message, "expression nested too deeply");

        let err = expr_error(&format!("{}a", "!".repeat(10_000)));
        assert_eq!(err.message, "expression nested too deeply");

        let types = format!("fn f(): {}i32{} {{}}", "[".repeat(5_000), ", 1]".repeat(5_000));
        assert_eq!(parse_str(&types).unwrap_err().message, "expression nested too deeply");

        let blocks = format!("fn f() {{ {}{} }}", "if a { ".repeat(5_000), "} ".repeat(5_000));
        assert_eq!(parse_str(&blocks).unwrap_err().message, "expression nested too deeply");
    }

    #[test]
    fn test_nesting_below_the_limit_parses() {
        assert_eq!(sexpr("- - - a"), "(-(-(-a)))");
        let module = parse_str("fn f(): [[[i32, 1], 2], 3] { if a { if b { while c { ret d } } } }").unwrap();
        assert_eq!(module.decls.len(), 1);
        // Chains of binary operators loop instead of recursing.
        let chain = vec!["a"; 5_000].join(" + ");
        assert!(parse_str(&format!("fn f() {{ ret {chain} }}")).is_ok());
    }

    #[test]
    fn test_reserved_operators_do_not_parse() {
        let err = parse_str("fn f() { a += 1 }").unwrap_err();
        assert_eq!(err.message, "unexpected token '+=' expected '}'");
        assert_eq!(expr_error("++a").message, "expected expression");
    }
}
