//! Type catalog.
//!
//! Every data kind the comparison kernels understand, together with the
//! capabilities that decide which kernel variants exist for it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Data kinds supported by the kernel matrix.
///
/// Declaration order is the order kernels are listed in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DType {
    /// Boolean
    Bool,
    /// Pointer-sized signed integer (`isize`)
    Int,
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// Pointer-sized unsigned integer (`usize`)
    Uint,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// Integer holding an address; ordered, but without arithmetic identity
    Uintptr,
    /// 32-bit IEEE 754 float
    F32,
    /// 64-bit IEEE 754 float
    F64,
    /// Complex number with `f32` parts
    C64,
    /// Complex number with `f64` parts
    C128,
    /// UTF-8 string, ordered by bytes
    Str,
    /// Opaque pointer, compared by address identity only
    UnsafePointer,
}

impl DType {
    /// All kinds, in matrix order.
    pub const ALL: [DType; 18] = [
        DType::Bool,
        DType::Int,
        DType::I8,
        DType::I16,
        DType::I32,
        DType::I64,
        DType::Uint,
        DType::U8,
        DType::U16,
        DType::U32,
        DType::U64,
        DType::Uintptr,
        DType::F32,
        DType::F64,
        DType::C64,
        DType::C128,
        DType::Str,
        DType::UnsafePointer,
    ];

    /// Suffix used in kernel names (`eqDDBoolsI32` → `I32`).
    pub const fn suffix(self) -> &'static str {
        match self {
            DType::Bool => "B",
            DType::Int => "I",
            DType::I8 => "I8",
            DType::I16 => "I16",
            DType::I32 => "I32",
            DType::I64 => "I64",
            DType::Uint => "U",
            DType::U8 => "U8",
            DType::U16 => "U16",
            DType::U32 => "U32",
            DType::U64 => "U64",
            DType::Uintptr => "Uintptr",
            DType::F32 => "F32",
            DType::F64 => "F64",
            DType::C64 => "C64",
            DType::C128 => "C128",
            DType::Str => "Str",
            DType::UnsafePointer => "UnsafePointer",
        }
    }

    /// Resolve a kernel-name suffix back to its kind.
    pub fn from_suffix(suffix: &str) -> Option<DType> {
        DType::ALL.into_iter().find(|dtype| dtype.suffix() == suffix)
    }

    /// Every kind supports `==` and `!=`.
    pub const fn is_equatable(self) -> bool {
        true
    }

    /// Whether `<`, `<=`, `>`, `>=` kernels exist for this kind.
    pub const fn is_orderable(self) -> bool {
        !matches!(
            self,
            DType::Bool | DType::C64 | DType::C128 | DType::UnsafePointer
        )
    }

    /// Whether the kind has a zero and a one, which the same-type indicator
    /// result needs.
    pub const fn has_additive_identity(self) -> bool {
        !matches!(
            self,
            DType::Bool | DType::Uintptr | DType::Str | DType::UnsafePointer
        )
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::Bool => "bool",
            DType::Int => "int",
            DType::I8 => "int8",
            DType::I16 => "int16",
            DType::I32 => "int32",
            DType::I64 => "int64",
            DType::Uint => "uint",
            DType::U8 => "uint8",
            DType::U16 => "uint16",
            DType::U32 => "uint32",
            DType::U64 => "uint64",
            DType::Uintptr => "uintptr",
            DType::F32 => "float32",
            DType::F64 => "float64",
            DType::C64 => "complex64",
            DType::C128 => "complex128",
            DType::Str => "string",
            DType::UnsafePointer => "unsafe.Pointer",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_round_trip() {
        for dtype in DType::ALL {
            assert_eq!(DType::from_suffix(dtype.suffix()), Some(dtype));
        }
        assert_eq!(DType::from_suffix("Q8"), None);
    }

    #[test]
    fn test_ordering_capability() {
        assert!(DType::I32.is_orderable());
        assert!(DType::Str.is_orderable());
        assert!(DType::Uintptr.is_orderable());
        assert!(!DType::Bool.is_orderable());
        assert!(!DType::C64.is_orderable());
        assert!(!DType::C128.is_orderable());
        assert!(!DType::UnsafePointer.is_orderable());
    }

    #[test]
    fn test_additive_identity_capability() {
        let without: Vec<_> = DType::ALL
            .into_iter()
            .filter(|d| !d.has_additive_identity())
            .collect();
        assert_eq!(
            without,
            vec![DType::Bool, DType::Uintptr, DType::Str, DType::UnsafePointer]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(DType::C128.to_string(), "complex128");
        assert_eq!(DType::Uint.to_string(), "uint");
    }
}
