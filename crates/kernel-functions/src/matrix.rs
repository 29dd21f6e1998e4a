//! The kernel matrix: every supported (operator, kind, shape, result) tuple,
//! addressable by kernel name.

use std::sync::OnceLock;

use cmpkit_registry::{
    CmpOp, Column, DType, KernelError, KernelVariant, Operand, ResultKind, Shape,
};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Name index over the supported kernel variants.
#[derive(Debug, Clone)]
pub struct KernelMatrix {
    variants: IndexMap<String, KernelVariant>,
}

static MATRIX: OnceLock<KernelMatrix> = OnceLock::new();

/// Every supported variant, ordered by operator, then kind, then DD-Bools,
/// DD-Same, DS-Bools, DS-Same.
pub fn variants() -> impl Iterator<Item = KernelVariant> {
    CmpOp::ALL.into_iter().flat_map(|op| {
        DType::ALL.into_iter().flat_map(move |dtype| {
            Shape::ALL.into_iter().flat_map(move |shape| {
                ResultKind::ALL
                    .into_iter()
                    .map(move |result| KernelVariant::new(op, dtype, shape, result))
            })
        })
    })
    .filter(KernelVariant::is_supported)
}

impl KernelMatrix {
    pub fn new() -> Self {
        let variants: IndexMap<_, _> = variants().map(|v| (v.name(), v)).collect();
        debug!(kernels = variants.len(), "built kernel matrix");
        Self { variants }
    }

    /// Process-wide matrix, built on first use.
    pub fn global() -> &'static KernelMatrix {
        MATRIX.get_or_init(KernelMatrix::new)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Variants in matrix order.
    pub fn iter(&self) -> impl Iterator<Item = &KernelVariant> {
        self.variants.values()
    }

    /// Variants of one operator.
    pub fn for_op(&self, op: CmpOp) -> impl Iterator<Item = &KernelVariant> {
        self.iter().filter(move |v| v.op == op)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    /// Resolve a kernel name.
    ///
    /// A well-formed name outside the matrix (`gtDDBoolsC64`) is
    /// [`KernelError::UnsupportedVariant`]; anything else is
    /// [`KernelError::UnknownKernel`].
    pub fn lookup(&self, name: &str) -> Result<KernelVariant, KernelError> {
        if let Some(variant) = self.variants.get(name) {
            return Ok(*variant);
        }
        match KernelVariant::parse(name) {
            Some(variant) => Err(KernelError::UnsupportedVariant(variant)),
            None => Err(KernelError::UnknownKernel(name.to_string())),
        }
    }

    /// Evaluate the kernel `name` on dynamic operands.
    ///
    /// Operands must match the kernel's element kind and shape.
    pub fn call(&self, name: &str, lhs: &Column, rhs: Operand<'_>) -> Result<Column, KernelError> {
        let variant = self.lookup(name)?;
        if lhs.dtype() != variant.dtype {
            return Err(KernelError::TypeMismatch {
                expected: variant.dtype,
                got: lhs.dtype(),
            });
        }
        if rhs.shape() != variant.shape {
            return Err(KernelError::ShapeMismatch {
                expected: variant.shape,
                got: rhs.shape(),
            });
        }

        let kernel = cmpkit_registry::get(variant.op)
            .ok_or_else(|| KernelError::UnknownKernel(variant.op.prefix().to_string()))?;
        trace!(kernel = %variant, len = lhs.len(), "calling kernel");
        kernel.eval(lhs, rhs, variant.result)
    }
}

impl Default for KernelMatrix {
    fn default() -> Self {
        Self::new()
    }
}
