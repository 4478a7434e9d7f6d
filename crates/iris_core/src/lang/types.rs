//! Primitive type vocabulary.
//!
//! The tokenizer turns each of these spellings into a dedicated type token, and the parser maps that token to a
//! basic type node. User-defined types are plain identifiers and never appear here.
//!
//! ## Examples
//! ```rust
//! use iris_core::lang::types::{self, PrimitiveTypeId, TypeFamily};
//!
//! assert_eq!(types::from_str("usz"), Some(PrimitiveTypeId::Usz));
//! assert_eq!(types::info_for(PrimitiveTypeId::I16).bit_width, Some(16));
//! assert_eq!(types::info_for(PrimitiveTypeId::F32).family, TypeFamily::Float);
//! ```

use super::registry::{Since, Stability};

/// Stable identifier for every primitive type name.
///
/// ## Notes
/// - The discriminant order matches the order of [`PRIMITIVE_TYPES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveTypeId {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Isz,
    Usz,
    F32,
    F64,
    Str,
    Bool,
}

/// Broad grouping of primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    SignedInt,
    UnsignedInt,
    Float,
    Str,
    Bool,
}

/// Metadata for a primitive type.
///
/// ## Notes
/// - `bit_width` is `None` for pointer-sized integers (target dependent) and for non-numeric types.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveTypeInfo {
    pub id: PrimitiveTypeId,
    pub canonical: &'static str,
    pub family: TypeFamily,
    pub bit_width: Option<u8>,
    pub since: Since,
    pub stability: Stability,
}

impl PrimitiveTypeInfo {
    pub fn is_signed(&self) -> bool {
        matches!(self.family, TypeFamily::SignedInt | TypeFamily::Float)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.family, TypeFamily::SignedInt | TypeFamily::UnsignedInt)
    }

    pub fn is_float(&self) -> bool {
        self.family == TypeFamily::Float
    }
}

/// Registry of all primitive types.
pub const PRIMITIVE_TYPES: &[PrimitiveTypeInfo] = &[
    ty(PrimitiveTypeId::I8, "i8", TypeFamily::SignedInt, Some(8)),
    ty(PrimitiveTypeId::I16, "i16", TypeFamily::SignedInt, Some(16)),
    ty(PrimitiveTypeId::I32, "i32", TypeFamily::SignedInt, Some(32)),
    ty(PrimitiveTypeId::I64, "i64", TypeFamily::SignedInt, Some(64)),
    ty(PrimitiveTypeId::U8, "u8", TypeFamily::UnsignedInt, Some(8)),
    ty(PrimitiveTypeId::U16, "u16", TypeFamily::UnsignedInt, Some(16)),
    ty(PrimitiveTypeId::U32, "u32", TypeFamily::UnsignedInt, Some(32)),
    ty(PrimitiveTypeId::U64, "u64", TypeFamily::UnsignedInt, Some(64)),
    ty(PrimitiveTypeId::Isz, "isz", TypeFamily::SignedInt, None),
    ty(PrimitiveTypeId::Usz, "usz", TypeFamily::UnsignedInt, None),
    ty(PrimitiveTypeId::F32, "f32", TypeFamily::Float, Some(32)),
    ty(PrimitiveTypeId::F64, "f64", TypeFamily::Float, Some(64)),
    ty(PrimitiveTypeId::Str, "str", TypeFamily::Str, None),
    ty(PrimitiveTypeId::Bool, "bool", TypeFamily::Bool, None),
];

pub fn as_str(id: PrimitiveTypeId) -> &'static str {
    info_for(id).canonical
}

pub fn info_for(id: PrimitiveTypeId) -> &'static PrimitiveTypeInfo {
    &PRIMITIVE_TYPES[id as usize]
}

/// Resolve a spelling to its primitive type id.
pub fn from_str(s: &str) -> Option<PrimitiveTypeId> {
    PRIMITIVE_TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}

const fn ty(id: PrimitiveTypeId, canonical: &'static str, family: TypeFamily, bit_width: Option<u8>) -> PrimitiveTypeInfo {
    PrimitiveTypeInfo {
        id,
        canonical,
        family,
        bit_width,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
