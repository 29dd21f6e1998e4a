// Kernel matrix properties over every element kind

use std::thread;

use cmpkit_kernels::{
    CmpOp, Column, DType, KernelError, KernelMatrix, Operand, ResultKind, Scalar, Shape, evaluate,
};
use cmpkit_registry::{Complex64, Complex128, RawPtr, Uintptr};
use rstest::rstest;

/// `(lhs, rhs, scalar, one)` for a kind; `one` is `None` without an identity.
fn samples(dtype: DType) -> (Column, Column, Scalar, Option<Scalar>) {
    match dtype {
        DType::Bool => (
            Column::from(vec![true, false, true]),
            Column::from(vec![true, true, false]),
            Scalar::from(true),
            None,
        ),
        DType::Int => (
            Column::from(vec![-1isize, 2, 3]),
            Column::from(vec![-1isize, 5, 0]),
            Scalar::from(2isize),
            Some(Scalar::from(1isize)),
        ),
        DType::I8 => (
            Column::from(vec![i8::MIN, 2, 3]),
            Column::from(vec![i8::MIN, 5, 0]),
            Scalar::from(2i8),
            Some(Scalar::from(1i8)),
        ),
        DType::I16 => (
            Column::from(vec![-7i16, 2, 3]),
            Column::from(vec![-7i16, 5, 0]),
            Scalar::from(2i16),
            Some(Scalar::from(1i16)),
        ),
        DType::I32 => (
            Column::from(vec![1i32, 2, 3]),
            Column::from(vec![1i32, 5, 3]),
            Scalar::from(2i32),
            Some(Scalar::from(1i32)),
        ),
        DType::I64 => (
            Column::from(vec![i64::MAX, 2, 3]),
            Column::from(vec![i64::MAX, 5, 0]),
            Scalar::from(2i64),
            Some(Scalar::from(1i64)),
        ),
        DType::Uint => (
            Column::from(vec![0usize, 2, 3]),
            Column::from(vec![0usize, 5, 0]),
            Scalar::from(2usize),
            Some(Scalar::from(1usize)),
        ),
        DType::U8 => (
            Column::from(vec![255u8, 2, 3]),
            Column::from(vec![255u8, 5, 0]),
            Scalar::from(2u8),
            Some(Scalar::from(1u8)),
        ),
        DType::U16 => (
            Column::from(vec![1u16, 2, 3]),
            Column::from(vec![1u16, 5, 0]),
            Scalar::from(2u16),
            Some(Scalar::from(1u16)),
        ),
        DType::U32 => (
            Column::from(vec![1u32, 2, 3]),
            Column::from(vec![1u32, 5, 0]),
            Scalar::from(2u32),
            Some(Scalar::from(1u32)),
        ),
        DType::U64 => (
            Column::from(vec![u64::MAX, 2, 3]),
            Column::from(vec![u64::MAX, 5, 0]),
            Scalar::from(2u64),
            Some(Scalar::from(1u64)),
        ),
        DType::Uintptr => (
            Column::from(vec![Uintptr(0x10), Uintptr(0x20), Uintptr(0x30)]),
            Column::from(vec![Uintptr(0x10), Uintptr(0x50), Uintptr(0x00)]),
            Scalar::from(Uintptr(0x20)),
            None,
        ),
        DType::F32 => (
            Column::from(vec![f32::NAN, 2.0, 3.0]),
            Column::from(vec![f32::NAN, 5.0, 0.5]),
            Scalar::from(2.0f32),
            Some(Scalar::from(1.0f32)),
        ),
        DType::F64 => (
            Column::from(vec![1.0f64, 2.0, f64::INFINITY]),
            Column::from(vec![1.0f64, 5.0, 0.5]),
            Scalar::from(2.0f64),
            Some(Scalar::from(1.0f64)),
        ),
        DType::C64 => (
            Column::from(vec![
                Complex64::new(1.0, 1.0),
                Complex64::new(2.0, 0.0),
                Complex64::new(0.0, 3.0),
            ]),
            Column::from(vec![
                Complex64::new(1.0, 1.0),
                Complex64::new(2.0, 1.0),
                Complex64::new(0.0, 0.0),
            ]),
            Scalar::from(Complex64::new(2.0, 0.0)),
            Some(Scalar::from(Complex64::new(1.0, 0.0))),
        ),
        DType::C128 => (
            Column::from(vec![
                Complex128::new(1.0, -1.0),
                Complex128::new(2.0, 0.0),
                Complex128::new(0.0, 3.0),
            ]),
            Column::from(vec![
                Complex128::new(1.0, -1.0),
                Complex128::new(2.0, 1.0),
                Complex128::new(0.0, 0.0),
            ]),
            Scalar::from(Complex128::new(2.0, 0.0)),
            Some(Scalar::from(Complex128::new(1.0, 0.0))),
        ),
        DType::Str => (
            Column::from(vec!["a".to_string(), "b".to_string(), "c".to_string()]),
            Column::from(vec!["a".to_string(), "bb".to_string(), "B".to_string()]),
            Scalar::from("b".to_string()),
            None,
        ),
        DType::UnsafePointer => {
            let p = RawPtr::from_ptr(&DType::ALL as *const _);
            (
                Column::from(vec![p, RawPtr::NULL, p]),
                Column::from(vec![p, p, RawPtr::NULL]),
                Scalar::from(p),
                None,
            )
        }
    }
}

fn rhs_for<'a>(shape: Shape, rhs: &'a Column, scalar: &'a Scalar) -> Operand<'a> {
    match shape {
        Shape::ArrayArray => Operand::Column(rhs),
        Shape::ArrayScalar => Operand::Scalar(scalar),
    }
}

#[rstest]
#[case(CmpOp::Eq, 64)]
#[case(CmpOp::Ne, 64)]
#[case(CmpOp::Gt, 52)]
#[case(CmpOp::Gte, 52)]
#[case(CmpOp::Lt, 52)]
#[case(CmpOp::Lte, 52)]
fn test_variant_counts(#[case] op: CmpOp, #[case] expected: usize) {
    assert_eq!(KernelMatrix::global().for_op(op).count(), expected);
}

#[test]
fn test_matrix_names_are_unique() {
    let matrix = KernelMatrix::global();
    assert_eq!(matrix.len(), 64 * 2 + 52 * 4);
    for variant in matrix.iter() {
        assert_eq!(matrix.lookup(&variant.name()), Ok(*variant));
    }
}

#[rstest]
#[case(DType::C64)]
#[case(DType::C128)]
#[case(DType::Bool)]
#[case(DType::UnsafePointer)]
fn test_no_ordering_for_equality_only_kinds(#[case] dtype: DType) {
    let matrix = KernelMatrix::global();
    assert!(
        matrix
            .iter()
            .filter(|v| v.dtype == dtype)
            .all(|v| !v.op.is_ordering())
    );

    let (lhs, rhs, _, _) = samples(dtype);
    for op in [CmpOp::Gt, CmpOp::Gte, CmpOp::Lt, CmpOp::Lte] {
        let err = evaluate(op, &lhs, Operand::Column(&rhs), ResultKind::BoolMask).unwrap_err();
        assert!(matches!(err, KernelError::UnsupportedVariant(_)), "{op} on {dtype}");
    }
}

#[rstest]
#[case(DType::Bool)]
#[case(DType::Str)]
#[case(DType::Uintptr)]
#[case(DType::UnsafePointer)]
fn test_no_same_type_without_identity(#[case] dtype: DType) {
    let matrix = KernelMatrix::global();
    assert!(
        matrix
            .iter()
            .filter(|v| v.dtype == dtype)
            .all(|v| v.result == ResultKind::BoolMask)
    );

    let (lhs, rhs, _, _) = samples(dtype);
    let err = evaluate(CmpOp::Eq, &lhs, Operand::Column(&rhs), ResultKind::SameType).unwrap_err();
    assert!(matches!(err, KernelError::UnsupportedVariant(_)));
}

#[test]
fn test_indicator_matches_mask() {
    let matrix = KernelMatrix::global();
    for variant in matrix.iter().filter(|v| v.result == ResultKind::SameType) {
        let (lhs, rhs, scalar, one) = samples(variant.dtype);
        let one = one.expect("same-type variants need a one");
        let rhs = rhs_for(variant.shape, &rhs, &scalar);

        let same = evaluate(variant.op, &lhs, rhs, ResultKind::SameType).unwrap();
        let mask = evaluate(variant.op, &lhs, rhs, ResultKind::BoolMask).unwrap();
        assert_eq!(same.dtype(), variant.dtype);

        let ones = evaluate(CmpOp::Eq, &same, Operand::Scalar(&one), ResultKind::BoolMask).unwrap();
        assert_eq!(ones, mask, "{variant}");
    }
}

#[test]
fn test_scalar_matches_broadcast() {
    let matrix = KernelMatrix::global();
    for variant in matrix.iter().filter(|v| v.shape == Shape::ArrayScalar) {
        let (lhs, _, scalar, _) = samples(variant.dtype);
        let broadcast = Column::broadcast(&scalar, lhs.len());

        let from_scalar = evaluate(variant.op, &lhs, Operand::Scalar(&scalar), variant.result);
        let from_array = evaluate(variant.op, &lhs, Operand::Column(&broadcast), variant.result);
        assert_eq!(from_scalar, from_array, "{variant}");
    }
}

#[test]
fn test_every_variant_runs_through_the_registry() {
    let matrix = KernelMatrix::global();
    for variant in matrix.iter() {
        let (lhs, rhs, scalar, _) = samples(variant.dtype);
        let out = matrix
            .call(&variant.name(), &lhs, rhs_for(variant.shape, &rhs, &scalar))
            .unwrap();
        assert_eq!(out.len(), lhs.len(), "{variant}");
    }
}

#[rstest]
#[case("eqDDBoolsI32", Column::from(vec![true, false, true]))]
#[case("eqDDSameI32", Column::from(vec![1i32, 0, 1]))]
#[case("neDDBoolsI32", Column::from(vec![false, true, false]))]
fn test_concrete_array_cases(#[case] name: &str, #[case] expected: Column) {
    let (lhs, rhs, _, _) = samples(DType::I32);
    let out = KernelMatrix::global()
        .call(name, &lhs, Operand::Column(&rhs))
        .unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_concrete_scalar_cases() {
    let matrix = KernelMatrix::global();

    let a = Column::from(vec![1i32, 2, 3]);
    let out = matrix.call("eqDSBoolsI32", &a, Operand::Scalar(&Scalar::from(2i32)));
    assert_eq!(out, Ok(Column::from(vec![false, true, false])));

    let f = Column::from(vec![1.0f64, 2.0, 3.0]);
    let out = matrix.call("gtDSSameF64", &f, Operand::Scalar(&Scalar::from(2.0f64)));
    assert_eq!(out, Ok(Column::from(vec![0.0f64, 0.0, 1.0])));
}

#[test]
fn test_length_mismatch() {
    let a = Column::from(vec![1u16, 2, 3]);
    let b = Column::from(vec![1u16]);
    let err = KernelMatrix::global()
        .call("lteDDSameU16", &a, Operand::Column(&b))
        .unwrap_err();
    assert_eq!(err, KernelError::LengthMismatch { left: 3, right: 1 });
}

#[test]
fn test_empty_columns() {
    let a = Column::from(Vec::<String>::new());
    let out = KernelMatrix::global()
        .call("ltDSBoolsStr", &a, Operand::Scalar(&Scalar::from("x".to_string())))
        .unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = DType::ALL
        .into_iter()
        .map(|dtype| {
            thread::spawn(move || {
                let matrix = KernelMatrix::global();
                let (lhs, rhs, _, _) = samples(dtype);
                (0..100)
                    .map(|_| evaluate(CmpOp::Eq, &lhs, Operand::Column(&rhs), ResultKind::BoolMask))
                    .collect::<Result<Vec<_>, _>>()
                    .map(|outs| (matrix.len(), outs))
            })
        })
        .collect();

    for handle in handles {
        let (len, outs) = handle.join().unwrap().unwrap();
        assert_eq!(len, 64 * 2 + 52 * 4);
        assert!(outs.windows(2).all(|w| w[0] == w[1]));
    }
}
