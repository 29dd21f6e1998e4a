//! Element capabilities.
//!
//! The type catalog's capabilities as trait bounds, so an unsupported kernel
//! (ordering on complex numbers, a same-type result for strings) does not
//! type-check in the generic API.

use cmpkit_registry::{Complex64, Complex128, DType, RawPtr, Uintptr};
use num_traits::{One, Zero};

/// A kind that supports `==` and `!=`.
pub trait Element: PartialEq + Clone + Send + Sync + 'static {
    /// Catalog entry for this type
    const DTYPE: DType;
}

/// A kind that supports `<`, `<=`, `>`, `>=`.
///
/// Implemented explicitly: `bool` is `PartialOrd` in Rust but has no ordering
/// kernels.
pub trait Orderable: Element + PartialOrd {}

/// A kind with a zero and a one, used by same-type results.
pub trait Indicator: Element {
    /// One when `hit`, zero otherwise.
    fn indicator(hit: bool) -> Self;
}

impl<T> Indicator for T
where
    T: Element + Zero + One,
{
    #[inline]
    fn indicator(hit: bool) -> Self {
        if hit { T::one() } else { T::zero() }
    }
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(impl Element for $ty {
            const DTYPE: DType = DType::$dtype;
        })*
    };
}

macro_rules! impl_orderable {
    ($($ty:ty),* $(,)?) => {
        $(impl Orderable for $ty {})*
    };
}

impl_element! {
    bool => Bool,
    isize => Int,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    usize => Uint,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    Uintptr => Uintptr,
    f32 => F32,
    f64 => F64,
    Complex64 => C64,
    Complex128 => C128,
    String => Str,
    RawPtr => UnsafePointer,
}

impl_orderable! {
    isize, i8, i16, i32, i64,
    usize, u8, u16, u32, u64,
    Uintptr, f32, f64, String,
}
