//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the expression parser is driven by:
//! fixity, associativity and the [`Binding`] level an infix operator combines at.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact; the tokenizer is responsible for longest-match splitting (`<<=` is one
//!   operator, never `<`, `<`, `=`).
//! - Compound assignments (`+=`, `<<=`, ...) and `++`/`--` are tokenized but have no expression rule yet; their
//!   entries carry [`Stability::Reserved`] and `binding: None`.
//!
//! ## Examples
//! ```rust
//! use iris_core::lang::operators::{self, Associativity, Binding, OperatorId};
//!
//! assert_eq!(operators::from_str("<<="), Some(OperatorId::ShlEq));
//! let plus = operators::info_for(OperatorId::Plus);
//! assert_eq!(plus.binding, Some(Binding::Term));
//! assert_eq!(operators::info_for(OperatorId::Eq).associativity, Associativity::Right);
//! assert!(Binding::Factor > Binding::Term);
//! ```

use super::registry::{Since, Stability};

/// Binding power ladder of the expression parser, lowest to highest.
///
/// The derived `Ord` is the ladder order; the parser compares levels directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Binding {
    Assign,
    Or,
    And,
    Equality,
    BitAnd,
    BitXor,
    BitOr,
    Comparison,
    BitShift,
    Term,
    Factor,
    Unary,
    Call,
    MemberSelect,
    Primary,
}

impl Binding {
    /// Lowest level; a full expression is parsed with this as its minimum.
    pub const LOWEST: Binding = Binding::Assign;
}

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Position an operator may appear in relative to its operand(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
///
/// ## Notes
/// - The discriminant order matches the order of [`OPERATORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    PlusPlus,
    Minus,
    MinusMinus,
    Star,
    Slash,
    Percent,

    // Bitwise
    Shl,
    Shr,
    Amp,
    Pipe,
    Caret,

    // Logical
    AmpAmp,
    PipePipe,
    Bang,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    ShlEq,
    ShrEq,
    AmpEq,
    AmpAmpEq,
    PipeEq,
    PipePipeEq,
    CaretEq,

    // Comparison
    Lt,
    LtEq,
    EqEq,
    NotEq,
    GtEq,
    Gt,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `binding` is the level the operator's infix rule combines at; `None` means there is no infix rule.
/// - Prefix operators always parse their operand at [`Binding::Unary`].
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub fixity: &'static [Fixity],
    pub binding: Option<Binding>,
    pub associativity: Associativity,
    pub since: Since,
    pub stability: Stability,
}

impl OperatorInfo {
    pub fn is_prefix(&self) -> bool {
        self.fixity.contains(&Fixity::Prefix)
    }

    pub fn is_infix(&self) -> bool {
        self.fixity.contains(&Fixity::Infix)
    }
}

const INFIX: &[Fixity] = &[Fixity::Infix];
const PREFIX: &[Fixity] = &[Fixity::Prefix];
const PREFIX_INFIX: &[Fixity] = &[Fixity::Prefix, Fixity::Infix];

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    left(OperatorId::Plus, "+", Binding::Term),
    reserved(OperatorId::PlusPlus, "++"),
    op(
        OperatorId::Minus,
        "-",
        PREFIX_INFIX,
        Some(Binding::Term),
        Associativity::Left,
    ),
    reserved(OperatorId::MinusMinus, "--"),
    left(OperatorId::Star, "*", Binding::Factor),
    left(OperatorId::Slash, "/", Binding::Factor),
    left(OperatorId::Percent, "%", Binding::Factor),
    // Bitwise
    left(OperatorId::Shl, "<<", Binding::BitShift),
    left(OperatorId::Shr, ">>", Binding::BitShift),
    left(OperatorId::Amp, "&", Binding::BitAnd),
    left(OperatorId::Pipe, "|", Binding::BitOr),
    left(OperatorId::Caret, "^", Binding::BitXor),
    // Logical
    left(OperatorId::AmpAmp, "&&", Binding::And),
    left(OperatorId::PipePipe, "||", Binding::Or),
    op(OperatorId::Bang, "!", PREFIX, None, Associativity::None),
    // Assignment
    op(
        OperatorId::Eq,
        "=",
        INFIX,
        Some(Binding::Assign),
        Associativity::Right,
    ),
    reserved(OperatorId::PlusEq, "+="),
    reserved(OperatorId::MinusEq, "-="),
    reserved(OperatorId::StarEq, "*="),
    reserved(OperatorId::SlashEq, "/="),
    reserved(OperatorId::PercentEq, "%="),
    reserved(OperatorId::ShlEq, "<<="),
    reserved(OperatorId::ShrEq, ">>="),
    reserved(OperatorId::AmpEq, "&="),
    reserved(OperatorId::AmpAmpEq, "&&="),
    reserved(OperatorId::PipeEq, "|="),
    reserved(OperatorId::PipePipeEq, "||="),
    reserved(OperatorId::CaretEq, "^="),
    // Comparison
    left(OperatorId::Lt, "<", Binding::Comparison),
    left(OperatorId::LtEq, "<=", Binding::Comparison),
    left(OperatorId::EqEq, "==", Binding::Equality),
    left(OperatorId::NotEq, "!=", Binding::Equality),
    left(OperatorId::GtEq, ">=", Binding::Comparison),
    left(OperatorId::Gt, ">", Binding::Comparison),
];

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    fixity: &'static [Fixity],
    binding: Option<Binding>,
    associativity: Associativity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        fixity,
        binding,
        associativity,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}

const fn left(id: OperatorId, spelling: &'static str, binding: Binding) -> OperatorInfo {
    op(id, spelling, INFIX, Some(binding), Associativity::Left)
}

const fn reserved(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    OperatorInfo {
        stability: Stability::Reserved,
        ..op(id, spelling, &[], None, Associativity::None)
    }
}
