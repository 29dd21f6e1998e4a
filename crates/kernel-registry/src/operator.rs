//! Operator catalog.
//!
//! The declared table of element-wise operators. Table order is the public
//! catalog order: generated wrappers, the operation registry and the kernel
//! matrix all follow it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::normalize::{OperatorDescriptor, normalize_catalog};

/// Number of operands an operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arity {
    /// One operand
    Unary,
    /// Two operands
    Binary,
}

impl Arity {
    /// Operand count
    pub const fn operands(self) -> usize {
        match self {
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Unary => f.write_str("unary"),
            Arity::Binary => f.write_str("binary"),
        }
    }
}

/// Result representation of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultKind {
    /// One `bool` per element
    BoolMask,
    /// One element of the input type per element: one when the predicate
    /// holds, zero otherwise
    SameType,
}

impl ResultKind {
    /// Both result kinds, in matrix order.
    pub const ALL: [ResultKind; 2] = [ResultKind::BoolMask, ResultKind::SameType];

    /// Kernel-name fragment (`Bools` / `Same`).
    pub const fn fragment(self) -> &'static str {
        match self {
            ResultKind::BoolMask => "Bools",
            ResultKind::SameType => "Same",
        }
    }
}

/// Operand layout of a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Two sequences of equal length
    ArrayArray,
    /// A sequence and one broadcast value
    ArrayScalar,
}

impl Shape {
    /// Both shapes, in matrix order.
    pub const ALL: [Shape; 2] = [Shape::ArrayArray, Shape::ArrayScalar];

    /// Kernel-name fragment (`DD` / `DS`).
    pub const fn fragment(self) -> &'static str {
        match self {
            Shape::ArrayArray => "DD",
            Shape::ArrayScalar => "DS",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::ArrayArray => f.write_str("array-array"),
            Shape::ArrayScalar => f.write_str("array-scalar"),
        }
    }
}

/// Element-wise comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CmpOp {
    /// `a == b`
    Eq,
    /// `a != b`
    Ne,
    /// `a > b`
    Gt,
    /// `a >= b`
    Gte,
    /// `a < b`
    Lt,
    /// `a <= b`
    Lte,
}

impl CmpOp {
    /// All comparison operators, in matrix order.
    pub const ALL: [CmpOp; 6] = [
        CmpOp::Eq,
        CmpOp::Ne,
        CmpOp::Gt,
        CmpOp::Gte,
        CmpOp::Lt,
        CmpOp::Lte,
    ];

    /// Lower-case prefix used in kernel names.
    pub const fn prefix(self) -> &'static str {
        match self {
            CmpOp::Eq => "eq",
            CmpOp::Ne => "ne",
            CmpOp::Gt => "gt",
            CmpOp::Gte => "gte",
            CmpOp::Lt => "lt",
            CmpOp::Lte => "lte",
        }
    }

    /// Public API name.
    pub const fn public_name(self) -> &'static str {
        match self {
            CmpOp::Eq => "Eq",
            CmpOp::Ne => "Ne",
            CmpOp::Gt => "Gt",
            CmpOp::Gte => "Gte",
            CmpOp::Lt => "Lt",
            CmpOp::Lte => "Lte",
        }
    }

    /// Ordering operators need an orderable element kind.
    pub const fn is_ordering(self) -> bool {
        matches!(self, CmpOp::Gt | CmpOp::Gte | CmpOp::Lt | CmpOp::Lte)
    }

    /// Resolve a kernel-name prefix.
    pub fn from_prefix(prefix: &str) -> Option<CmpOp> {
        CmpOp::ALL.into_iter().find(|op| op.prefix() == prefix)
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.public_name())
    }
}

/// One row of the operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    /// Opcode identifier (e.g. `"LtOpType"`)
    pub internal_name: &'static str,
    /// Operand count
    pub arity: Arity,
    /// Result representations the operator can produce
    pub result_kinds: &'static [ResultKind],
    /// Whether operands must be orderable
    pub orderable: bool,
    /// Kernel-matrix operator, for comparisons
    pub comparison: Option<CmpOp>,
}

const SAME_ONLY: &[ResultKind] = &[ResultKind::SameType];
const MASK_OR_SAME: &[ResultKind] = &[ResultKind::BoolMask, ResultKind::SameType];

impl OperatorSpec {
    /// Arithmetic unary operator.
    pub const fn unary(internal_name: &'static str) -> Self {
        Self {
            internal_name,
            arity: Arity::Unary,
            result_kinds: SAME_ONLY,
            orderable: false,
            comparison: None,
        }
    }

    /// Arithmetic binary operator.
    pub const fn binary(internal_name: &'static str) -> Self {
        Self {
            internal_name,
            arity: Arity::Binary,
            result_kinds: SAME_ONLY,
            orderable: false,
            comparison: None,
        }
    }

    /// Binary comparison backed by the kernel matrix.
    pub const fn comparison(internal_name: &'static str, op: CmpOp) -> Self {
        Self {
            internal_name,
            arity: Arity::Binary,
            result_kinds: MASK_OR_SAME,
            orderable: op.is_ordering(),
            comparison: Some(op),
        }
    }

    /// Normalized descriptor for this row.
    pub fn descriptor(&self) -> OperatorDescriptor {
        OperatorDescriptor::new(self.internal_name, self.arity)
    }
}

/// Unary element-wise operators.
pub static UNARY_OPERATORS: &[OperatorSpec] = &[
    OperatorSpec::unary("AbsOpType"),
    OperatorSpec::unary("SignOpType"),
    OperatorSpec::unary("CeilOpType"),
    OperatorSpec::unary("FloorOpType"),
    OperatorSpec::unary("SinOpType"),
    OperatorSpec::unary("CosOpType"),
    OperatorSpec::unary("ExpOpType"),
    OperatorSpec::unary("LnOpType"),
    OperatorSpec::unary("Log2OpType"),
    OperatorSpec::unary("NegOpType"),
    OperatorSpec::unary("SquareOpType"),
    OperatorSpec::unary("SqrtOpType"),
    OperatorSpec::unary("InverseOpType"),
    OperatorSpec::unary("InverseSqrtOpType"),
    OperatorSpec::unary("CubeOpType"),
    OperatorSpec::unary("TanhOpType"),
    OperatorSpec::unary("SigmoidOpType"),
    OperatorSpec::unary("Log1pOpType"),
    OperatorSpec::unary("Expm1OpType"),
    OperatorSpec::unary("SoftplusOpType"),
];

/// Binary element-wise operators.
pub static BINARY_OPERATORS: &[OperatorSpec] = &[
    OperatorSpec::binary("AddOpType"),
    OperatorSpec::binary("SubOpType"),
    OperatorSpec::binary("MulOpType"),
    OperatorSpec::binary("DivOpType"),
    OperatorSpec::binary("PowOpType"),
    OperatorSpec::comparison("LtOpType", CmpOp::Lt),
    OperatorSpec::comparison("GtOpType", CmpOp::Gt),
    OperatorSpec::comparison("LteOpType", CmpOp::Lte),
    OperatorSpec::comparison("GteOpType", CmpOp::Gte),
    OperatorSpec::comparison("EqOpType", CmpOp::Eq),
    OperatorSpec::comparison("NeOpType", CmpOp::Ne),
];

/// Table for one arity.
pub fn operators(arity: Arity) -> &'static [OperatorSpec] {
    match arity {
        Arity::Unary => UNARY_OPERATORS,
        Arity::Binary => BINARY_OPERATORS,
    }
}

/// Normalized descriptors for one arity, in table order.
pub fn descriptors(arity: Arity) -> Result<Vec<OperatorDescriptor>, RegistryError> {
    normalize_catalog(operators(arity).iter().map(|spec| spec.internal_name), arity)
}

/// Find a table row by internal or public name.
pub fn find_operator(name: &str) -> Option<&'static OperatorSpec> {
    UNARY_OPERATORS
        .iter()
        .chain(BINARY_OPERATORS)
        .find(|spec| spec.internal_name == name || spec.descriptor().public_name == name)
}
