//! Comparison Kernel Registry.
//!
//! Single source of truth for the element-wise operator catalog and the
//! link-time registry of comparison kernels.
//!
//! # Architecture
//!
//! - [`operator`] declares the operator table (name, arity, result kinds,
//!   orderability). Generated API surfaces and the kernel matrix read it
//!   directly; nothing is scraped from source.
//! - [`normalize`] turns opcode identifiers into public API names.
//! - [`dtype`] is the type catalog with per-kind capabilities.
//! - [`graph`] maps operator names to graph-node constructors.
//! - [`KERNELS`] is a [`linkme::distributed_slice`]: each comparison operator
//!   registers one [`KernelDescriptor`] at link time, and lookups dispatch
//!   through it.
//!
//! # Example Registration
//!
//! ```ignore
//! use cmpkit_registry::{CmpOp, KERNELS, KernelDescriptor, linkme::distributed_slice};
//!
//! #[distributed_slice(KERNELS)]
//! static EQ: KernelDescriptor = KernelDescriptor {
//!     op: CmpOp::Eq,
//!     name: "eq",
//!     doc: "Element-wise equality",
//!     implementation: eq_kernel,
//! };
//! ```
//!
//! # Example Lookup
//!
//! ```ignore
//! use cmpkit_registry::{CmpOp, Column, Operand, ResultKind, eval};
//!
//! let a = Column::from(vec![1i32, 2, 3]);
//! let b = Column::from(vec![1i32, 5, 3]);
//! let mask = eval(CmpOp::Eq, &a, Operand::Column(&b), ResultKind::BoolMask);
//! ```

pub mod dtype;
pub mod error;
pub mod graph;
pub mod normalize;
pub mod operator;
pub mod value;
pub mod variant;

pub use linkme;

pub use dtype::DType;
pub use error::{KernelError, RegistryError};
pub use graph::{ElemBinOp, OperationRegistry, OrderedChildren};
pub use normalize::{OperatorDescriptor, normalize_catalog};
pub use operator::{
    Arity, BINARY_OPERATORS, CmpOp, OperatorSpec, ResultKind, Shape, UNARY_OPERATORS,
};
pub use value::{Column, Complex64, Complex128, Operand, RawPtr, Scalar, Uintptr};
pub use variant::KernelVariant;

use linkme::distributed_slice;

/// Signature of a registered comparison kernel family.
///
/// The operand shape selects array-array or array-scalar; `result` selects
/// the output representation.
pub type CompareFn = fn(&Column, Operand<'_>, ResultKind) -> Result<Column, KernelError>;

/// Descriptor for one registered comparison operator
pub struct KernelDescriptor {
    /// Operator this family implements
    pub op: CmpOp,
    /// Kernel-name prefix (e.g. "eq", "gte")
    pub name: &'static str,
    /// Documentation string
    pub doc: &'static str,
    /// The implementation
    pub implementation: CompareFn,
}

impl KernelDescriptor {
    /// Evaluate the kernel
    pub fn eval(
        &self,
        lhs: &Column,
        rhs: Operand<'_>,
        result: ResultKind,
    ) -> Result<Column, KernelError> {
        (self.implementation)(lhs, rhs, result)
    }
}

/// Distributed slice collecting all comparison kernel registrations.
#[distributed_slice]
pub static KERNELS: [KernelDescriptor];

/// Get all registered kernel names
pub fn all_names() -> impl Iterator<Item = &'static str> {
    KERNELS.iter().map(|k| k.name)
}

/// Look up a kernel family by operator
pub fn get(op: CmpOp) -> Option<&'static KernelDescriptor> {
    KERNELS.iter().find(|k| k.op == op)
}

/// Look up a kernel family by name
pub fn get_by_name(name: &str) -> Option<&'static KernelDescriptor> {
    KERNELS.iter().find(|k| k.name == name)
}

/// Check if a name is a registered kernel family
pub fn is_known(name: &str) -> bool {
    get_by_name(name).is_some()
}

/// Evaluate a registered kernel family
pub fn eval(
    op: CmpOp,
    lhs: &Column,
    rhs: Operand<'_>,
    result: ResultKind,
) -> Option<Result<Column, KernelError>> {
    get(op).map(|k| k.eval(lhs, rhs, result))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test kernel registered via the slice directly
    #[distributed_slice(KERNELS)]
    static TEST_NE: KernelDescriptor = KernelDescriptor {
        op: CmpOp::Ne,
        name: "test_ne",
        doc: "Inequality over i32 columns",
        implementation: |lhs, rhs, _| match (lhs, rhs) {
            (Column::I32(a), Operand::Scalar(Scalar::I32(b))) => {
                Ok(Column::Bool(a.iter().map(|x| x != b).collect()))
            }
            _ => Err(KernelError::UnknownKernel("test_ne".into())),
        },
    };

    #[test]
    fn test_lookup() {
        assert!(is_known("test_ne"));
        assert!(!is_known("nonexistent"));
        assert_eq!(get(CmpOp::Ne).map(|k| k.name), Some("test_ne"));
    }

    #[test]
    fn test_eval() {
        let lhs = Column::from(vec![1i32, 2, 3]);
        let rhs = Scalar::from(2i32);
        let result = eval(CmpOp::Ne, &lhs, Operand::Scalar(&rhs), ResultKind::BoolMask);
        assert_eq!(result, Some(Ok(Column::Bool(vec![true, false, true]))));
        assert!(eval(CmpOp::Lt, &lhs, Operand::Scalar(&rhs), ResultKind::BoolMask).is_none());
    }
}
