//! Human-readable renderings of the AST.
//!
//! - [`dump_module`]: indented debug tree, one node per line (`Label: Node`), with `Identifier:` / `Operator:`
//!   fields. Implemented as a [`Visitor`].
//! - [`to_sexpr`]: compact, fully parenthesised single-line rendering, e.g. `(1 + (2 * 3))` or
//!   `{let a = 10 ret a}`.

use crate::ast::{
    Block, Decl, ElseBody, Expr, FunctionDecl, Identifier, IfBody, Module, Param, Spanned, Stmt, StructDecl, Type,
    Value,
};
use crate::source::{Interner, SourceContext};
use crate::visit::{self, Visitor};

const INDENT: &str = "  ";

/// Render `module` as an indented tree.
pub fn dump_module(ctx: &SourceContext, module: &Module) -> String {
    let mut dump = AstDump::new(ctx);
    dump.visit_module(module);
    dump.finish()
}

/// Tree printer state.
///
/// A pending label is printed in front of the next node name and then cleared.
pub struct AstDump<'ctx> {
    ctx: &'ctx SourceContext,
    out: String,
    indent: usize,
    label: Option<&'static str>,
}

impl<'ctx> AstDump<'ctx> {
    pub fn new(ctx: &'ctx SourceContext) -> Self {
        Self {
            ctx,
            out: String::new(),
            indent: 0,
            label: None,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn start_node(&mut self, name: &str) {
        self.write_indent();
        if let Some(label) = self.label.take() {
            self.out.push_str(label);
            self.out.push_str(": ");
        }
        self.out.push_str(name);
        self.out.push('\n');
        self.indent += 1;
    }

    fn end_node(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    fn field(&mut self, text: &str) {
        self.write_indent();
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn label(&mut self, label: &'static str) {
        self.label = Some(label);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    fn identifier_field(&mut self, identifier: &Identifier) {
        let text = format!("Identifier: {}", self.ctx.resolve(identifier.symbol));
        self.field(&text);
    }

    fn groups(&self, groups: &[Spanned<Param>]) -> String {
        groups
            .iter()
            .map(|group| to_sexpr(&group.node, self.ctx.interner()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'ast> Visitor<'ast> for AstDump<'_> {
    fn visit_module(&mut self, module: &'ast Module) {
        self.start_node("Module");
        visit::walk_module(self, module);
        self.end_node();
    }

    fn visit_function(&mut self, function: &'ast FunctionDecl) {
        let signature = &function.signature.node;
        self.start_node("Function");
        self.identifier_field(&signature.identifier);
        let params = format!("Parameters: {}", self.groups(&signature.params));
        self.field(params.trim_end());
        if let Some(ty) = &signature.return_type {
            let ty = format!("ReturnType: {}", to_sexpr(&ty.node, self.ctx.interner()));
            self.field(&ty);
        }
        self.visit_block(&function.block);
        self.end_node();
    }

    fn visit_struct(&mut self, decl: &'ast StructDecl) {
        self.start_node("Struct");
        self.identifier_field(&decl.identifier);
        let fields = format!("Fields: {}", self.groups(&decl.fields));
        self.field(fields.trim_end());
        self.end_node();
    }

    fn visit_block(&mut self, block: &'ast Spanned<Block>) {
        self.start_node("Block");
        visit::walk_block(self, block);
        self.end_node();
    }

    fn visit_stmt(&mut self, stmt: &'ast Spanned<Stmt>) {
        match &stmt.node {
            Stmt::Let { identifier, expr } | Stmt::Mut { identifier, expr } => {
                let name = if matches!(stmt.node, Stmt::Mut { .. }) { "Mut" } else { "Let" };
                self.start_node(name);
                self.identifier_field(identifier);
                self.label("Expr");
                self.visit_expr(expr);
                self.end_node();
            }
            Stmt::Return(expr) => {
                self.start_node("Return");
                self.visit_expr(expr);
                self.end_node();
            }
            Stmt::Expr(expr) => {
                self.start_node("ExprStmt");
                self.visit_expr(expr);
                self.end_node();
            }
            Stmt::IfElse { .. } => {
                self.start_node("IfElse");
                visit::walk_stmt(self, stmt);
                self.end_node();
            }
            Stmt::While { condition, block } => {
                self.start_node("While");
                self.label("Condition");
                self.visit_expr(condition);
                self.visit_block(block);
                self.end_node();
            }
        }
    }

    fn visit_if_body(&mut self, body: &'ast Spanned<IfBody>) {
        self.start_node("IfBody");
        self.label("Condition");
        visit::walk_if_body(self, body);
        self.end_node();
    }

    fn visit_else_body(&mut self, body: &'ast Spanned<ElseBody>) {
        self.start_node("ElseBody");
        self.visit_block(&body.node.block);
        self.end_node();
    }

    fn visit_expr(&mut self, expr: &'ast Spanned<Expr>) {
        match &expr.node {
            Expr::Value(_) => {
                self.start_node("Value");
                let ctx = self.ctx;
                self.field(ctx.literal(expr.range));
            }
            Expr::Name(identifier) => {
                self.start_node("Name");
                self.identifier_field(identifier);
            }
            Expr::Unary(op, operand) => {
                self.start_node("Unary");
                self.field(&format!("Operator: {}", op.node));
                self.visit_expr(operand);
            }
            Expr::Binary(left, op, right) => {
                self.start_node("Binary");
                self.field(&format!("Operator: {}", op.node));
                self.label("Left");
                self.visit_expr(left);
                self.label("Right");
                self.visit_expr(right);
            }
            Expr::Assign(target, value) => {
                self.start_node("Assign");
                self.label("Target");
                self.visit_expr(target);
                self.label("Value");
                self.visit_expr(value);
            }
            Expr::MemberSelect(value, select) => {
                self.start_node("MemberSelect");
                self.label("Value");
                self.visit_expr(value);
                self.label("Select");
                self.visit_expr(select);
            }
            Expr::Call(callee, args) => {
                self.start_node("Call");
                self.label("Function");
                self.visit_expr(callee);
                self.start_node("Args");
                for arg in args {
                    self.visit_expr(arg);
                }
                self.end_node();
            }
        }
        self.end_node();
    }
}

// ============================================================================
// S-expressions
// ============================================================================

/// Nodes that have a compact one-line rendering.
pub trait ToSexpr {
    fn write_sexpr(&self, out: &mut String, interner: &Interner);
}

/// Render `node` on a single line, parenthesising every operator application.
///
/// ## Examples
/// ```rust
/// use iris_core::lang::operators::Binding;
/// use iris_syntax::dump::to_sexpr;
/// use iris_syntax::parser::Parser;
/// use iris_syntax::source::SourceContext;
///
/// let mut ctx = SourceContext::from_text("a = b + c * d");
/// let expr = Parser::new(&mut ctx).parse_expr(Binding::LOWEST).unwrap();
/// assert_eq!(to_sexpr(&expr, ctx.interner()), "(a = (b + (c * d)))");
/// ```
pub fn to_sexpr<T: ToSexpr + ?Sized>(node: &T, interner: &Interner) -> String {
    let mut out = String::new();
    node.write_sexpr(&mut out, interner);
    out
}

fn write_separated<T: ToSexpr>(out: &mut String, interner: &Interner, items: &[T], separator: &str) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        item.write_sexpr(out, interner);
    }
}

impl<T: ToSexpr> ToSexpr for Spanned<T> {
    fn write_sexpr(&self, out: &mut String, interner: &Interner) {
        self.node.write_sexpr(out, interner);
    }
}

impl ToSexpr for Identifier {
    fn write_sexpr(&self, out: &mut String, interner: &Interner) {
        out.push_str(interner.resolve(self.symbol));
    }
}

impl ToSexpr for Value {
    fn write_sexpr(&self, out: &mut String, _interner: &Interner) {
        let text = match self {
            Value::Int(v) => v.to_string(),
            Value::Float(v) => format!("{v:?}"),
            Value::Bool(v) => v.to_string(),
            Value::Char(c) => format!("'{c}'"),
            Value::Str(s) => format!("\"{s}\""),
        };
        out.push_str(&text);
    }
}

impl ToSexpr for Expr {
    fn write_sexpr(&self, out: &mut String, interner: &Interner) {
        match self {
            Expr::Value(value) => value.write_sexpr(out, interner),
            Expr::Name(identifier) => identifier.write_sexpr(out, interner),
            Expr::Unary(op, operand) => {
                out.push('(');
                out.push_str(&op.node.to_string());
                operand.write_sexpr(out, interner);
                out.push(')');
            }
            Expr::Binary(left, op, right) => {
                out.push('(');
                left.write_sexpr(out, interner);
                out.push(' ');
                out.push_str(op.node.as_str());
                out.push(' ');
                right.write_sexpr(out, interner);
                out.push(')');
            }
            Expr::Assign(target, value) => {
                out.push('(');
                target.write_sexpr(out, interner);
                out.push_str(" = ");
                value.write_sexpr(out, interner);
                out.push(')');
            }
            Expr::MemberSelect(value, select) => {
                out.push('(');
                value.write_sexpr(out, interner);
                out.push('.');
                select.write_sexpr(out, interner);
                out.push(')');
            }
            Expr::Call(callee, args) => {
                out.push('(');
                callee.write_sexpr(out, interner);
                out.push('(');
                write_separated(out, interner, args, ", ");
                out.push_str("))");
            }
        }
    }
}

impl ToSexpr for Stmt {
    fn write_sexpr(&self, out: &mut String, interner: &Interner) {
        match self {
            Stmt::Expr(expr) => expr.write_sexpr(out, interner),
            Stmt::Let { identifier, expr } | Stmt::Mut { identifier, expr } => {
                out.push_str(if matches!(self, Stmt::Mut { .. }) { "mut " } else { "let " });
                identifier.write_sexpr(out, interner);
                out.push_str(" = ");
                expr.write_sexpr(out, interner);
            }
            Stmt::Return(expr) => {
                out.push_str("ret ");
                expr.write_sexpr(out, interner);
            }
            Stmt::IfElse { then, orelse } => {
                out.push_str("if ");
                then.node.condition.write_sexpr(out, interner);
                out.push(' ');
                then.node.block.write_sexpr(out, interner);
                if let Some(orelse) = orelse {
                    out.push_str(" else ");
                    orelse.node.block.write_sexpr(out, interner);
                }
            }
            Stmt::While { condition, block } => {
                out.push_str("while ");
                condition.write_sexpr(out, interner);
                out.push(' ');
                block.write_sexpr(out, interner);
            }
        }
    }
}

impl ToSexpr for Block {
    fn write_sexpr(&self, out: &mut String, interner: &Interner) {
        out.push('{');
        write_separated(out, interner, &self.stmts, " ");
        out.push('}');
    }
}

impl ToSexpr for Type {
    fn write_sexpr(&self, out: &mut String, interner: &Interner) {
        match self {
            Type::Basic(kind) => out.push_str(&kind.to_string()),
            Type::Name(identifier) => identifier.write_sexpr(out, interner),
            Type::Array(element, count) => {
                out.push('[');
                element.write_sexpr(out, interner);
                out.push_str(&format!(", {count}]"));
            }
        }
    }
}

impl ToSexpr for Param {
    fn write_sexpr(&self, out: &mut String, interner: &Interner) {
        write_separated(out, interner, &self.identifiers, ", ");
        out.push_str(": ");
        self.ty.write_sexpr(out, interner);
    }
}

impl ToSexpr for Decl {
    fn write_sexpr(&self, out: &mut String, interner: &Interner) {
        match self {
            Decl::Function(function) => {
                let signature = &function.signature.node;
                out.push_str("fn ");
                signature.identifier.write_sexpr(out, interner);
                out.push('(');
                write_separated(out, interner, &signature.params, ", ");
                out.push(')');
                if let Some(ty) = &signature.return_type {
                    out.push_str(": ");
                    ty.write_sexpr(out, interner);
                }
                out.push(' ');
                function.block.write_sexpr(out, interner);
            }
            Decl::Struct(decl) => {
                out.push_str("struct ");
                decl.identifier.write_sexpr(out, interner);
                out.push_str(" {");
                write_separated(out, interner, &decl.fields, ", ");
                out.push('}');
            }
        }
    }
}

impl ToSexpr for Module {
    fn write_sexpr(&self, out: &mut String, interner: &Interner) {
        for decl in &self.decls {
            decl.write_sexpr(out, interner);
            out.push('\n');
        }
    }
}
