//! Abstract Syntax Tree definitions for iris
//!
//! Every node is wrapped in [`Spanned`], whose range covers exactly the source text of the node and all of its
//! descendants. Recursive children are owned through `Box` (single owner, no sharing).
//!
//! Identifiers are interned: an [`Identifier`] holds a [`Symbol`] that resolves through the
//! [`SourceContext`](crate::source::SourceContext) it was parsed from.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::source::{SourceRange, Symbol};
use iris_core::lang::operators::OperatorId;
use iris_core::lang::types::PrimitiveTypeId;

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub range: SourceRange,
}

impl<T> Spanned<T> {
    pub fn new(node: T, range: SourceRange) -> Self {
        Self { node, range }
    }
}

/// An interned name with the range of this particular occurrence.
///
/// ## Notes
/// - Equality and hashing only look at the symbol: two occurrences of `x` are equal wherever they appear.
#[derive(Debug, Clone, Copy)]
pub struct Identifier {
    pub range: SourceRange,
    pub symbol: Symbol,
}

impl Identifier {
    pub fn new(range: SourceRange, symbol: Symbol) -> Self {
        Self { range, symbol }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

/// The root artifact: every declaration of one translation unit, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub decls: Vec<Spanned<Decl>>,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Function(FunctionDecl),
    Struct(StructDecl),
}

/// A group of names sharing one type: `a, b: i32`.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub identifiers: Vec<Identifier>,
    pub ty: Spanned<Type>,
}

/// Struct fields use the same `names ':' type` grouping as parameters.
pub type Field = Param;

/// `fn name(params): type`; the range runs from `fn` through the return type (or `)` without one).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub identifier: Identifier,
    pub params: Vec<Spanned<Param>>,
    pub return_type: Option<Spanned<Type>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub signature: Spanned<FunctionSignature>,
    pub block: Spanned<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub identifier: Identifier,
    pub fields: Vec<Spanned<Field>>,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Basic(BasicTypeKind),
    /// Reference to a user-defined type.
    Name(Identifier),
    /// `[element, count]`
    Array(Box<Spanned<Type>>, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicTypeKind {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    ISize,
    USize,
    Float32,
    Float64,
    Bool,
    Str,
}

impl From<PrimitiveTypeId> for BasicTypeKind {
    fn from(id: PrimitiveTypeId) -> Self {
        match id {
            PrimitiveTypeId::I8 => BasicTypeKind::Int8,
            PrimitiveTypeId::I16 => BasicTypeKind::Int16,
            PrimitiveTypeId::I32 => BasicTypeKind::Int32,
            PrimitiveTypeId::I64 => BasicTypeKind::Int64,
            PrimitiveTypeId::U8 => BasicTypeKind::UInt8,
            PrimitiveTypeId::U16 => BasicTypeKind::UInt16,
            PrimitiveTypeId::U32 => BasicTypeKind::UInt32,
            PrimitiveTypeId::U64 => BasicTypeKind::UInt64,
            PrimitiveTypeId::Isz => BasicTypeKind::ISize,
            PrimitiveTypeId::Usz => BasicTypeKind::USize,
            PrimitiveTypeId::F32 => BasicTypeKind::Float32,
            PrimitiveTypeId::F64 => BasicTypeKind::Float64,
            PrimitiveTypeId::Bool => BasicTypeKind::Bool,
            PrimitiveTypeId::Str => BasicTypeKind::Str,
        }
    }
}

impl fmt::Display for BasicTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BasicTypeKind::Int8 => "i8",
            BasicTypeKind::Int16 => "i16",
            BasicTypeKind::Int32 => "i32",
            BasicTypeKind::Int64 => "i64",
            BasicTypeKind::UInt8 => "u8",
            BasicTypeKind::UInt16 => "u16",
            BasicTypeKind::UInt32 => "u32",
            BasicTypeKind::UInt64 => "u64",
            BasicTypeKind::ISize => "isz",
            BasicTypeKind::USize => "usz",
            BasicTypeKind::Float32 => "f32",
            BasicTypeKind::Float64 => "f64",
            BasicTypeKind::Bool => "bool",
            BasicTypeKind::Str => "str",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Statements
// ============================================================================

/// `{ stmt* }`; the range includes both braces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub stmts: Vec<Spanned<Stmt>>,
}

/// `if condition { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct IfBody {
    pub condition: Spanned<Expr>,
    pub block: Spanned<Block>,
}

/// `else { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ElseBody {
    pub block: Spanned<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Spanned<Expr>),
    Let {
        identifier: Identifier,
        expr: Spanned<Expr>,
    },
    Mut {
        identifier: Identifier,
        expr: Spanned<Expr>,
    },
    Return(Spanned<Expr>),
    IfElse {
        then: Spanned<IfBody>,
        orelse: Option<Spanned<ElseBody>>,
    },
    While {
        condition: Spanned<Expr>,
        block: Spanned<Block>,
    },
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Minus => Some(UnaryOp::Neg),
            OperatorId::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => f.write_str("-"),
            UnaryOp::Not => f.write_str("!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Or,
    And,
    Eq,
    NotEq,
    BitAnd,
    BitOr,
    BitXor,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
}

impl BinaryOp {
    /// Binary operator for an infix operator token. Assignment is not a binary operator.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        let op = match id {
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Div,
            OperatorId::Percent => BinaryOp::Mod,
            OperatorId::PipePipe => BinaryOp::Or,
            OperatorId::AmpAmp => BinaryOp::And,
            OperatorId::EqEq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::Amp => BinaryOp::BitAnd,
            OperatorId::Pipe => BinaryOp::BitOr,
            OperatorId::Caret => BinaryOp::BitXor,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::GtEq => BinaryOp::GtEq,
            OperatorId::Shl => BinaryOp::Shl,
            OperatorId::Shr => BinaryOp::Shr,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Value(Value),
    Name(Identifier),
    Unary(Spanned<UnaryOp>, Box<Spanned<Expr>>),
    Binary(Box<Spanned<Expr>>, Spanned<BinaryOp>, Box<Spanned<Expr>>),
    /// `value.select`; the selector is itself an expression.
    MemberSelect(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
    Call(Box<Spanned<Expr>>, Vec<Spanned<Expr>>),
    /// `target = value`
    Assign(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
}
