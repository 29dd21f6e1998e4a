//! Unary element-wise opcodes.

/// Unary operator kinds, in API order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnaryOperatorType {
    AbsOpType,
    SignOpType,
    CeilOpType,
    FloorOpType,

    SinOpType,
    CosOpType,
    ExpOpType,
    LnOpType,
    Log2OpType,
    NegOpType,
    SquareOpType,
    SqrtOpType,
    InverseOpType,
    InverseSqrtOpType,
    CubeOpType,
    TanhOpType,
    SigmoidOpType,

    Log1pOpType,
    Expm1OpType,
    SoftplusOpType,

    MaxUnaryOperator,
}

impl UnaryOperatorType {
    pub fn is_differentiable(self) -> bool {
        !matches!(self, Self::SignOpType | Self::CeilOpType | Self::FloorOpType)
    }
}
