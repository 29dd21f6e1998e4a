//! Comparison Kernels
//!
//! One generic implementation per shape and result kind. Predicates pick the
//! operator; their trait bounds restrict which element kinds they accept.
//!
//! ```
//! use cmpkit_kernels::compare::{Equal, Greater, compare_array_array, compare_array_scalar_same};
//!
//! let mask = compare_array_array::<_, Equal>(&[1, 2, 3], &[1, 5, 3]).unwrap();
//! assert_eq!(mask, [true, false, true]);
//!
//! let same = compare_array_scalar_same::<_, Greater>(&[1.0, 2.0, 3.0], &2.0);
//! assert_eq!(same, [0.0, 0.0, 1.0]);
//! ```

use cmpkit_registry::{
    CmpOp, Column, KERNELS, KernelDescriptor, KernelError, Operand, ResultKind,
    linkme::distributed_slice,
};

use crate::dispatch::evaluate;
use crate::element::{Element, Indicator, Orderable};

/// An element-wise comparison over `T`.
pub trait Predicate<T> {
    const OP: CmpOp;

    fn test(a: &T, b: &T) -> bool;
}

/// `a == b`
pub struct Equal;
/// `a != b`
pub struct NotEqual;
/// `a > b`
pub struct Greater;
/// `a >= b`
pub struct GreaterEqual;
/// `a < b`
pub struct Less;
/// `a <= b`
pub struct LessEqual;

impl<T: Element> Predicate<T> for Equal {
    const OP: CmpOp = CmpOp::Eq;

    #[inline]
    fn test(a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: Element> Predicate<T> for NotEqual {
    const OP: CmpOp = CmpOp::Ne;

    #[inline]
    fn test(a: &T, b: &T) -> bool {
        a != b
    }
}

impl<T: Orderable> Predicate<T> for Greater {
    const OP: CmpOp = CmpOp::Gt;

    #[inline]
    fn test(a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: Orderable> Predicate<T> for GreaterEqual {
    const OP: CmpOp = CmpOp::Gte;

    #[inline]
    fn test(a: &T, b: &T) -> bool {
        a >= b
    }
}

impl<T: Orderable> Predicate<T> for Less {
    const OP: CmpOp = CmpOp::Lt;

    #[inline]
    fn test(a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: Orderable> Predicate<T> for LessEqual {
    const OP: CmpOp = CmpOp::Lte;

    #[inline]
    fn test(a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Right-hand side of a typed comparison.
pub(crate) enum Rhs<'a, T> {
    Array(&'a [T]),
    Scalar(&'a T),
}

fn check_lengths<T>(a: &[T], b: &[T]) -> Result<(), KernelError> {
    if a.len() != b.len() {
        return Err(KernelError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Boolean mask of `pred` over `lhs` and `rhs`.
pub(crate) fn mask_with<T>(
    lhs: &[T],
    rhs: Rhs<'_, T>,
    pred: impl Fn(&T, &T) -> bool,
) -> Result<Vec<bool>, KernelError> {
    match rhs {
        Rhs::Array(rhs) => {
            check_lengths(lhs, rhs)?;
            Ok(lhs.iter().zip(rhs).map(|(a, b)| pred(a, b)).collect())
        }
        Rhs::Scalar(rhs) => Ok(lhs.iter().map(|a| pred(a, rhs)).collect()),
    }
}

/// Same-type 0/1 indicator of `pred` over `lhs` and `rhs`.
pub(crate) fn same_with<T: Indicator>(
    lhs: &[T],
    rhs: Rhs<'_, T>,
    pred: impl Fn(&T, &T) -> bool,
) -> Result<Vec<T>, KernelError> {
    match rhs {
        Rhs::Array(rhs) => {
            check_lengths(lhs, rhs)?;
            Ok(lhs
                .iter()
                .zip(rhs)
                .map(|(a, b)| T::indicator(pred(a, b)))
                .collect())
        }
        Rhs::Scalar(rhs) => Ok(lhs.iter().map(|a| T::indicator(pred(a, rhs))).collect()),
    }
}

/// `out[i] = P(a[i], b[i])`. Fails when the lengths differ.
pub fn compare_array_array<T, P>(a: &[T], b: &[T]) -> Result<Vec<bool>, KernelError>
where
    T: Element,
    P: Predicate<T>,
{
    mask_with(a, Rhs::Array(b), P::test)
}

/// `out[i] = P(a[i], b)`.
pub fn compare_array_scalar<T, P>(a: &[T], b: &T) -> Vec<bool>
where
    T: Element,
    P: Predicate<T>,
{
    a.iter().map(|x| P::test(x, b)).collect()
}

/// `out[i]` is one when `P(a[i], b[i])` holds, zero otherwise. Fails when the
/// lengths differ.
pub fn compare_array_array_same<T, P>(a: &[T], b: &[T]) -> Result<Vec<T>, KernelError>
where
    T: Indicator,
    P: Predicate<T>,
{
    same_with(a, Rhs::Array(b), P::test)
}

/// `out[i]` is one when `P(a[i], b)` holds, zero otherwise.
pub fn compare_array_scalar_same<T, P>(a: &[T], b: &T) -> Vec<T>
where
    T: Indicator,
    P: Predicate<T>,
{
    a.iter().map(|x| T::indicator(P::test(x, b))).collect()
}

fn eq_kernel(lhs: &Column, rhs: Operand<'_>, result: ResultKind) -> Result<Column, KernelError> {
    evaluate(CmpOp::Eq, lhs, rhs, result)
}

fn ne_kernel(lhs: &Column, rhs: Operand<'_>, result: ResultKind) -> Result<Column, KernelError> {
    evaluate(CmpOp::Ne, lhs, rhs, result)
}

fn gt_kernel(lhs: &Column, rhs: Operand<'_>, result: ResultKind) -> Result<Column, KernelError> {
    evaluate(CmpOp::Gt, lhs, rhs, result)
}

fn gte_kernel(lhs: &Column, rhs: Operand<'_>, result: ResultKind) -> Result<Column, KernelError> {
    evaluate(CmpOp::Gte, lhs, rhs, result)
}

fn lt_kernel(lhs: &Column, rhs: Operand<'_>, result: ResultKind) -> Result<Column, KernelError> {
    evaluate(CmpOp::Lt, lhs, rhs, result)
}

fn lte_kernel(lhs: &Column, rhs: Operand<'_>, result: ResultKind) -> Result<Column, KernelError> {
    evaluate(CmpOp::Lte, lhs, rhs, result)
}

/// Equal: `eq(a, b)`
///
/// Every element kind. Floats follow IEEE 754 (`NaN != NaN`).
#[distributed_slice(KERNELS)]
#[linkme(crate = cmpkit_registry::linkme)]
static EQ: KernelDescriptor = KernelDescriptor {
    op: CmpOp::Eq,
    name: "eq",
    doc: "Element-wise equality",
    implementation: eq_kernel,
};

/// Not equal: `ne(a, b)`
#[distributed_slice(KERNELS)]
#[linkme(crate = cmpkit_registry::linkme)]
static NE: KernelDescriptor = KernelDescriptor {
    op: CmpOp::Ne,
    name: "ne",
    doc: "Element-wise inequality",
    implementation: ne_kernel,
};

/// Greater than: `gt(a, b)`
///
/// Orderable kinds only; strings compare by bytes.
#[distributed_slice(KERNELS)]
#[linkme(crate = cmpkit_registry::linkme)]
static GT: KernelDescriptor = KernelDescriptor {
    op: CmpOp::Gt,
    name: "gt",
    doc: "Element-wise greater-than",
    implementation: gt_kernel,
};

/// Greater than or equal: `gte(a, b)`
#[distributed_slice(KERNELS)]
#[linkme(crate = cmpkit_registry::linkme)]
static GTE: KernelDescriptor = KernelDescriptor {
    op: CmpOp::Gte,
    name: "gte",
    doc: "Element-wise greater-than-or-equal",
    implementation: gte_kernel,
};

/// Less than: `lt(a, b)`
#[distributed_slice(KERNELS)]
#[linkme(crate = cmpkit_registry::linkme)]
static LT: KernelDescriptor = KernelDescriptor {
    op: CmpOp::Lt,
    name: "lt",
    doc: "Element-wise less-than",
    implementation: lt_kernel,
};

/// Less than or equal: `lte(a, b)`
#[distributed_slice(KERNELS)]
#[linkme(crate = cmpkit_registry::linkme)]
static LTE: KernelDescriptor = KernelDescriptor {
    op: CmpOp::Lte,
    name: "lte",
    doc: "Element-wise less-than-or-equal",
    implementation: lte_kernel,
};
