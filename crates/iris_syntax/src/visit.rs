//! AST visitor
//!
//! Read-only traversal over `Module → Decl → Block → Stmt → Expr`, plus parameter groups and types.
//!
//! Default `visit_*` methods call the matching `walk_*` function, which visits the node's children in source order.
//! Override a `visit_*` method to act on a node; call the `walk_*` function from the override to keep descending.
//!
//! ## Examples
//!
//! ```rust
//! use iris_syntax::ast::{Expr, Spanned};
//! use iris_syntax::source::SourceContext;
//! use iris_syntax::visit::{self, Visitor};
//!
//! #[derive(Default)]
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expr(&mut self, expr: &'ast Spanned<Expr>) {
//!         if matches!(expr.node, Expr::Call(..)) {
//!             self.0 += 1;
//!         }
//!         visit::walk_expr(self, expr);
//!     }
//! }
//!
//! let mut ctx = SourceContext::from_text("fn main() { f(g(1)) }");
//! let module = iris_syntax::parse(&mut ctx).unwrap();
//! let mut counter = CountCalls::default();
//! counter.visit_module(&module);
//! assert_eq!(counter.0, 2);
//! ```

use crate::ast::{
    Block, Decl, ElseBody, Expr, FunctionDecl, FunctionSignature, Identifier, IfBody, Module, Param, Spanned, Stmt,
    StructDecl, Type,
};

/// AST visitor trait.
pub trait Visitor<'ast> {
    fn visit_module(&mut self, module: &'ast Module) {
        walk_module(self, module);
    }

    fn visit_decl(&mut self, decl: &'ast Spanned<Decl>) {
        walk_decl(self, decl);
    }

    fn visit_function(&mut self, function: &'ast FunctionDecl) {
        walk_function(self, function);
    }

    fn visit_signature(&mut self, signature: &'ast Spanned<FunctionSignature>) {
        walk_signature(self, signature);
    }

    fn visit_struct(&mut self, decl: &'ast StructDecl) {
        walk_struct(self, decl);
    }

    /// Visit one `names: type` group of a parameter or field list.
    fn visit_param(&mut self, param: &'ast Spanned<Param>) {
        walk_param(self, param);
    }

    fn visit_type(&mut self, ty: &'ast Spanned<Type>) {
        walk_type(self, ty);
    }

    fn visit_block(&mut self, block: &'ast Spanned<Block>) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &'ast Spanned<Stmt>) {
        walk_stmt(self, stmt);
    }

    fn visit_if_body(&mut self, body: &'ast Spanned<IfBody>) {
        walk_if_body(self, body);
    }

    fn visit_else_body(&mut self, body: &'ast Spanned<ElseBody>) {
        self.visit_block(&body.node.block);
    }

    fn visit_expr(&mut self, expr: &'ast Spanned<Expr>) {
        walk_expr(self, expr);
    }

    /// Leaf: identifiers have no children.
    fn visit_identifier(&mut self, _identifier: &'ast Identifier) {}
}

pub fn walk_module<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, module: &'ast Module) {
    for decl in &module.decls {
        visitor.visit_decl(decl);
    }
}

pub fn walk_decl<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast Spanned<Decl>) {
    match &decl.node {
        Decl::Function(function) => visitor.visit_function(function),
        Decl::Struct(decl) => visitor.visit_struct(decl),
    }
}

pub fn walk_function<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, function: &'ast FunctionDecl) {
    visitor.visit_signature(&function.signature);
    visitor.visit_block(&function.block);
}

pub fn walk_signature<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, signature: &'ast Spanned<FunctionSignature>) {
    visitor.visit_identifier(&signature.node.identifier);
    for param in &signature.node.params {
        visitor.visit_param(param);
    }
    if let Some(ty) = &signature.node.return_type {
        visitor.visit_type(ty);
    }
}

pub fn walk_struct<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast StructDecl) {
    visitor.visit_identifier(&decl.identifier);
    for field in &decl.fields {
        visitor.visit_param(field);
    }
}

pub fn walk_param<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, param: &'ast Spanned<Param>) {
    for identifier in &param.node.identifiers {
        visitor.visit_identifier(identifier);
    }
    visitor.visit_type(&param.node.ty);
}

pub fn walk_type<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, ty: &'ast Spanned<Type>) {
    match &ty.node {
        Type::Basic(_) => {}
        Type::Name(identifier) => visitor.visit_identifier(identifier),
        Type::Array(element, _) => visitor.visit_type(element),
    }
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast Spanned<Block>) {
    for stmt in &block.node.stmts {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Spanned<Stmt>) {
    match &stmt.node {
        Stmt::Expr(expr) | Stmt::Return(expr) => visitor.visit_expr(expr),
        Stmt::Let { identifier, expr } | Stmt::Mut { identifier, expr } => {
            visitor.visit_identifier(identifier);
            visitor.visit_expr(expr);
        }
        Stmt::IfElse { then, orelse } => {
            visitor.visit_if_body(then);
            if let Some(orelse) = orelse {
                visitor.visit_else_body(orelse);
            }
        }
        Stmt::While { condition, block } => {
            visitor.visit_expr(condition);
            visitor.visit_block(block);
        }
    }
}

pub fn walk_if_body<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, body: &'ast Spanned<IfBody>) {
    visitor.visit_expr(&body.node.condition);
    visitor.visit_block(&body.node.block);
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Spanned<Expr>) {
    match &expr.node {
        Expr::Value(_) => {}
        Expr::Name(identifier) => visitor.visit_identifier(identifier),
        Expr::Unary(_, operand) => visitor.visit_expr(operand),
        Expr::Binary(left, _, right) => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        Expr::MemberSelect(value, select) => {
            visitor.visit_expr(value);
            visitor.visit_expr(select);
        }
        Expr::Call(callee, args) => {
            visitor.visit_expr(callee);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        Expr::Assign(target, value) => {
            visitor.visit_expr(target);
            visitor.visit_expr(value);
        }
    }
}
