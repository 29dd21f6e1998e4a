//! Binary element-wise opcodes.
#![allow(non_upper_case_globals)]

/// A binary operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryOperatorType(pub u8);

pub const AddOpType: BinaryOperatorType = BinaryOperatorType(0);
pub const SubOpType: BinaryOperatorType = BinaryOperatorType(1);
pub const MulOpType: BinaryOperatorType = BinaryOperatorType(2);
pub const DivOpType: BinaryOperatorType = BinaryOperatorType(3);
pub const PowOpType: BinaryOperatorType = BinaryOperatorType(4);
pub const LtOpType: BinaryOperatorType = BinaryOperatorType(5);
pub const GtOpType: BinaryOperatorType = BinaryOperatorType(6);
pub const LteOpType: BinaryOperatorType = BinaryOperatorType(7);
pub const GteOpType: BinaryOperatorType = BinaryOperatorType(8);
pub const EqOpType: BinaryOperatorType = BinaryOperatorType(9);
pub const NeOpType: BinaryOperatorType = BinaryOperatorType(10);
pub const MaxBinaryOpType: BinaryOperatorType = BinaryOperatorType(11);

impl BinaryOperatorType {
    pub fn is_comparison(self) -> bool {
        (LtOpType.0..=NeOpType.0).contains(&self.0)
    }
}
