//! Registry and kernel errors

use thiserror::Error;

use crate::dtype::DType;
use crate::operator::Shape;
use crate::variant::KernelVariant;

/// Catalog and operation-registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("operators `{first}` and `{second}` both normalize to `{public_name}`")]
    DuplicatePublicName {
        public_name: String,
        first: String,
        second: String,
    },

    #[error("operators `{first}` and `{second}` both generate `fn {fn_name}`")]
    DuplicateFnName {
        fn_name: String,
        first: String,
        second: String,
    },

    #[error("unknown operator `{0}`")]
    UnknownOperator(String),

    #[error("operator `{0}` is already registered")]
    AlreadyRegistered(String),

    #[error("operator `{op}` needs {expected} ordered children, node has {found}")]
    ChildCount {
        op: String,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while evaluating comparison kernels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("length mismatch: left operand has {left} elements, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("kernel `{0}` is not part of the kernel matrix")]
    UnsupportedVariant(KernelVariant),

    #[error("operand shape mismatch: kernel is {expected}, operands are {got}")]
    ShapeMismatch { expected: Shape, got: Shape },

    #[error("operand type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: DType, got: DType },

    #[error("unknown kernel `{0}`")]
    UnknownKernel(String),
}
