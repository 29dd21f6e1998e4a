//! Runtime dispatch over [`Column`] values.
//!
//! Each element kind binds its column/scalar views and its capabilities once;
//! [`evaluate`] then runs the generic kernels from [`crate::compare`] for
//! whichever kind the left operand holds.

use cmpkit_registry::{
    CmpOp, Column, DType, KernelError, KernelVariant, Operand, ResultKind, Scalar,
};

use crate::compare::{
    Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, Predicate, Rhs, mask_with, same_with,
};
use crate::element::{Element, Indicator, Orderable};

type PredicateFn<T> = fn(&T, &T) -> bool;

/// A kind the runtime table can dispatch to.
trait ColumnElement: Element {
    fn view(column: &Column) -> Option<&[Self]>;

    fn view_scalar(scalar: &Scalar) -> Option<&Self>;

    /// Predicate for `op`, or `None` if the kind cannot be ordered.
    fn predicate(op: CmpOp) -> Option<PredicateFn<Self>>;

    /// Same-type result, or `None` if the kind has no zero/one.
    fn same_column(
        lhs: &[Self],
        rhs: Rhs<'_, Self>,
        pred: PredicateFn<Self>,
    ) -> Option<Result<Column, KernelError>>;
}

fn ordered_predicate<T: Orderable>(op: CmpOp) -> Option<PredicateFn<T>> {
    let pred: PredicateFn<T> = match op {
        CmpOp::Eq => <Equal as Predicate<T>>::test,
        CmpOp::Ne => <NotEqual as Predicate<T>>::test,
        CmpOp::Gt => <Greater as Predicate<T>>::test,
        CmpOp::Gte => <GreaterEqual as Predicate<T>>::test,
        CmpOp::Lt => <Less as Predicate<T>>::test,
        CmpOp::Lte => <LessEqual as Predicate<T>>::test,
    };
    Some(pred)
}

fn equality_predicate<T: Element>(op: CmpOp) -> Option<PredicateFn<T>> {
    let pred: PredicateFn<T> = match op {
        CmpOp::Eq => <Equal as Predicate<T>>::test,
        CmpOp::Ne => <NotEqual as Predicate<T>>::test,
        CmpOp::Gt | CmpOp::Gte | CmpOp::Lt | CmpOp::Lte => return None,
    };
    Some(pred)
}

fn indicator_values<T: Indicator>(
    lhs: &[T],
    rhs: Rhs<'_, T>,
    pred: PredicateFn<T>,
) -> Result<Vec<T>, KernelError> {
    same_with(lhs, rhs, pred)
}

macro_rules! same_column {
    (indicator, $variant:ident) => {
        fn same_column(
            lhs: &[Self],
            rhs: Rhs<'_, Self>,
            pred: PredicateFn<Self>,
        ) -> Option<Result<Column, KernelError>> {
            Some(indicator_values(lhs, rhs, pred).map(Column::$variant))
        }
    };
    (none, $variant:ident) => {
        fn same_column(
            _: &[Self],
            _: Rhs<'_, Self>,
            _: PredicateFn<Self>,
        ) -> Option<Result<Column, KernelError>> {
            None
        }
    };
}

macro_rules! column_elements {
    ($($variant:ident => $ty:ty { predicate: $predicate:ident, same: $same:ident }),* $(,)?) => {
        $(
            impl ColumnElement for $ty {
                fn view(column: &Column) -> Option<&[Self]> {
                    match column {
                        Column::$variant(values) => Some(values.as_slice()),
                        _ => None,
                    }
                }

                fn view_scalar(scalar: &Scalar) -> Option<&Self> {
                    match scalar {
                        Scalar::$variant(value) => Some(value),
                        _ => None,
                    }
                }

                fn predicate(op: CmpOp) -> Option<PredicateFn<Self>> {
                    $predicate::<Self>(op)
                }

                same_column!($same, $variant);
            }
        )*

        /// Evaluate `op` on dynamically typed operands.
        ///
        /// The left operand's kind selects the kernel; the right operand must
        /// hold the same kind.
        pub fn evaluate(
            op: CmpOp,
            lhs: &Column,
            rhs: Operand<'_>,
            result: ResultKind,
        ) -> Result<Column, KernelError> {
            match lhs.dtype() {
                $(DType::$variant => evaluate_as::<$ty>(op, lhs, rhs, result),)*
            }
        }
    };
}

column_elements! {
    Bool => bool { predicate: equality_predicate, same: none },
    Int => isize { predicate: ordered_predicate, same: indicator },
    I8 => i8 { predicate: ordered_predicate, same: indicator },
    I16 => i16 { predicate: ordered_predicate, same: indicator },
    I32 => i32 { predicate: ordered_predicate, same: indicator },
    I64 => i64 { predicate: ordered_predicate, same: indicator },
    Uint => usize { predicate: ordered_predicate, same: indicator },
    U8 => u8 { predicate: ordered_predicate, same: indicator },
    U16 => u16 { predicate: ordered_predicate, same: indicator },
    U32 => u32 { predicate: ordered_predicate, same: indicator },
    U64 => u64 { predicate: ordered_predicate, same: indicator },
    Uintptr => cmpkit_registry::Uintptr { predicate: ordered_predicate, same: none },
    F32 => f32 { predicate: ordered_predicate, same: indicator },
    F64 => f64 { predicate: ordered_predicate, same: indicator },
    C64 => cmpkit_registry::Complex64 { predicate: equality_predicate, same: indicator },
    C128 => cmpkit_registry::Complex128 { predicate: equality_predicate, same: indicator },
    Str => String { predicate: ordered_predicate, same: none },
    UnsafePointer => cmpkit_registry::RawPtr { predicate: equality_predicate, same: none },
}

fn evaluate_as<T: ColumnElement>(
    op: CmpOp,
    lhs: &Column,
    rhs: Operand<'_>,
    result: ResultKind,
) -> Result<Column, KernelError> {
    let variant = KernelVariant::new(op, T::DTYPE, rhs.shape(), result);

    let values = T::view(lhs).ok_or(KernelError::TypeMismatch {
        expected: T::DTYPE,
        got: lhs.dtype(),
    })?;
    let mismatch = KernelError::TypeMismatch {
        expected: T::DTYPE,
        got: rhs.dtype(),
    };
    let rhs = match rhs {
        Operand::Column(column) => Rhs::Array(T::view(column).ok_or(mismatch)?),
        Operand::Scalar(scalar) => Rhs::Scalar(T::view_scalar(scalar).ok_or(mismatch)?),
    };

    let pred = T::predicate(op).ok_or(KernelError::UnsupportedVariant(variant))?;
    match result {
        ResultKind::BoolMask => mask_with(values, rhs, pred).map(Column::Bool),
        ResultKind::SameType => T::same_column(values, rhs, pred)
            .unwrap_or(Err(KernelError::UnsupportedVariant(variant))),
    }
}
