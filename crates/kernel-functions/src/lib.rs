//! Comparison Kernels
//!
//! Element-wise `==`, `!=`, `>`, `>=`, `<`, `<=` over every supported element
//! kind, in two shapes (array-array, array-scalar) and two result kinds
//! (boolean mask, same-type 0/1 indicator).
//!
//! The typed API in [`compare`] is generic over [`Element`]; trait bounds keep
//! unsupported combinations from compiling. [`evaluate`] and [`KernelMatrix`]
//! expose the same kernels over dynamic [`Column`] values. Each operator
//! registers itself in [`cmpkit_registry::KERNELS`].

pub mod compare;
mod dispatch;
pub mod element;
pub mod matrix;

pub use cmpkit_registry::{
    CmpOp, Column, DType, KernelError, KernelVariant, Operand, ResultKind, Scalar, Shape,
};
pub use dispatch::evaluate;
pub use element::{Element, Indicator, Orderable};
pub use matrix::KernelMatrix;
