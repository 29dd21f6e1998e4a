//! Kernel variant identity and naming.
//!
//! A kernel is addressed as `<op><shape><result><suffix>`, for example
//! `eqDDBoolsI32` (equality, array-array, boolean mask, `i32`) or
//! `gteDSSameF64` (greater-or-equal, array-scalar, same-type, `f64`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dtype::DType;
use crate::operator::{CmpOp, ResultKind, Shape};

/// Full identity of one kernel in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KernelVariant {
    pub op: CmpOp,
    pub dtype: DType,
    pub shape: Shape,
    pub result: ResultKind,
}

impl KernelVariant {
    pub const fn new(op: CmpOp, dtype: DType, shape: Shape, result: ResultKind) -> Self {
        Self {
            op,
            dtype,
            shape,
            result,
        }
    }

    /// Whether the element kind's capabilities allow this kernel.
    pub const fn is_supported(&self) -> bool {
        self.dtype.is_equatable()
            && (!self.op.is_ordering() || self.dtype.is_orderable())
            && (matches!(self.result, ResultKind::BoolMask) || self.dtype.has_additive_identity())
    }

    /// Kernel name.
    pub fn name(&self) -> String {
        format!(
            "{}{}{}{}",
            self.op.prefix(),
            self.shape.fragment(),
            self.result.fragment(),
            self.dtype.suffix()
        )
    }

    /// Parse a kernel name. Does not check capabilities.
    pub fn parse(name: &str) -> Option<Self> {
        // Longest prefixes first so `gte` is not read as `gt` + `e...`.
        let (op, rest) = ["gte", "lte", "eq", "ne", "gt", "lt"]
            .into_iter()
            .find_map(|prefix| {
                name.strip_prefix(prefix)
                    .and_then(|rest| Some((CmpOp::from_prefix(prefix)?, rest)))
            })?;
        let (shape, rest) = Shape::ALL
            .into_iter()
            .find_map(|shape| rest.strip_prefix(shape.fragment()).map(|r| (shape, r)))?;
        let (result, rest) = ResultKind::ALL
            .into_iter()
            .find_map(|result| rest.strip_prefix(result.fragment()).map(|r| (result, r)))?;
        let dtype = DType::from_suffix(rest)?;
        Some(Self::new(op, dtype, shape, result))
    }
}

impl fmt::Display for KernelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
