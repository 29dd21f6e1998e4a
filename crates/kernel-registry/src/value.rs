//! Dynamically typed operands for the runtime kernel table.
//!
//! [`Column`] holds a sequence of one element kind, [`Scalar`] a single
//! value. Variant names match [`DType`] one to one.

use crate::dtype::DType;
use crate::operator::Shape;

/// Complex number with `f32` parts.
pub type Complex64 = num_complex::Complex<f32>;

/// Complex number with `f64` parts.
pub type Complex128 = num_complex::Complex<f64>;

/// An address-sized integer. Ordered, but has no zero/one semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uintptr(pub usize);

/// An opaque pointer, compared by address only and never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawPtr(usize);

impl RawPtr {
    pub const NULL: RawPtr = RawPtr(0);

    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr as usize)
    }

    pub fn addr(self) -> usize {
        self.0
    }
}

macro_rules! define_values {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        /// A sequence of elements of one kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Column {
            $($variant(Vec<$ty>),)*
        }

        /// One element of some kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Scalar {
            $($variant($ty),)*
        }

        impl Column {
            /// Element kind
            pub fn dtype(&self) -> DType {
                match self {
                    $(Column::$variant(_) => DType::$variant,)*
                }
            }

            /// Number of elements
            pub fn len(&self) -> usize {
                match self {
                    $(Column::$variant(values) => values.len(),)*
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Column of `len` copies of `scalar`.
            pub fn broadcast(scalar: &Scalar, len: usize) -> Column {
                match scalar {
                    $(Scalar::$variant(value) => Column::$variant(vec![value.clone(); len]),)*
                }
            }
        }

        impl Scalar {
            /// Element kind
            pub fn dtype(&self) -> DType {
                match self {
                    $(Scalar::$variant(_) => DType::$variant,)*
                }
            }
        }

        $(
            impl From<Vec<$ty>> for Column {
                fn from(values: Vec<$ty>) -> Self {
                    Column::$variant(values)
                }
            }

            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value)
                }
            }
        )*
    };
}

define_values! {
    Bool => bool,
    Int => isize,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    Uint => usize,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    Uintptr => Uintptr,
    F32 => f32,
    F64 => f64,
    C64 => Complex64,
    C128 => Complex128,
    Str => String,
    UnsafePointer => RawPtr,
}

/// Right-hand operand of a comparison.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Column(&'a Column),
    Scalar(&'a Scalar),
}

impl Operand<'_> {
    pub fn shape(&self) -> Shape {
        match self {
            Operand::Column(_) => Shape::ArrayArray,
            Operand::Scalar(_) => Shape::ArrayScalar,
        }
    }

    pub fn dtype(&self) -> DType {
        match self {
            Operand::Column(column) => column.dtype(),
            Operand::Scalar(scalar) => scalar.dtype(),
        }
    }
}

impl<'a> From<&'a Column> for Operand<'a> {
    fn from(column: &'a Column) -> Self {
        Operand::Column(column)
    }
}

impl<'a> From<&'a Scalar> for Operand<'a> {
    fn from(scalar: &'a Scalar) -> Self {
        Operand::Scalar(scalar)
    }
}
