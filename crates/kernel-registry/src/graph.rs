//! Operation registry for graph execution.
//!
//! Maps operator names to constructors that turn a graph node and its ordered
//! children into an element-wise binary operation. The graph itself stays
//! opaque behind [`OrderedChildren`], so neither side depends on the other's
//! concrete types.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::RegistryError;
use crate::normalize::OperatorDescriptor;
use crate::operator::{Arity, OperatorSpec};

/// A directed graph that can list a node's predecessors in operand order.
pub trait OrderedChildren {
    type Node: Clone;

    fn ordered_children(&self, node: &Self::Node) -> Vec<Self::Node>;
}

/// An element-wise binary operation bound to its operand nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElemBinOp<N> {
    /// Opcode identifier
    pub opcode: String,
    pub lhs: N,
    pub rhs: N,
    /// Same-type 0/1 output instead of a boolean mask
    pub ret_same: bool,
}

impl<N> ElemBinOp<N> {
    pub fn new(opcode: impl Into<String>, lhs: N, rhs: N) -> Self {
        Self {
            opcode: opcode.into(),
            lhs,
            rhs,
            ret_same: false,
        }
    }
}

/// Builds an operation for one graph node.
pub type Constructor<G> = Box<
    dyn Fn(&G, &<G as OrderedChildren>::Node) -> Result<ElemBinOp<<G as OrderedChildren>::Node>, RegistryError>
        + Send
        + Sync,
>;

/// Default constructor: exactly two ordered children become `lhs` and `rhs`.
pub fn binary_constructor<G>(opcode: &str) -> Constructor<G>
where
    G: OrderedChildren + 'static,
{
    let opcode = opcode.to_string();
    Box::new(move |graph: &G, node: &G::Node| {
        match <[G::Node; 2]>::try_from(graph.ordered_children(node)) {
            Ok([lhs, rhs]) => Ok(ElemBinOp::new(opcode.clone(), lhs, rhs)),
            Err(children) => Err(RegistryError::ChildCount {
                op: opcode.clone(),
                expected: Arity::Binary.operands(),
                found: children.len(),
            }),
        }
    })
}

/// Operator name → construction capability.
///
/// Entries are keyed by public name; internal opcode names resolve through an
/// alias table.
pub struct OperationRegistry<G: OrderedChildren> {
    constructors: IndexMap<String, Constructor<G>>,
    aliases: IndexMap<String, String>,
}

impl<G> OperationRegistry<G>
where
    G: OrderedChildren + 'static,
{
    pub fn new() -> Self {
        Self {
            constructors: IndexMap::new(),
            aliases: IndexMap::new(),
        }
    }

    /// Registry with the default constructor for every binary row of `specs`.
    pub fn from_catalog(specs: &[OperatorSpec]) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for spec in specs.iter().filter(|spec| spec.arity == Arity::Binary) {
            let descriptor = spec.descriptor();
            let constructor = binary_constructor::<G>(&descriptor.internal_name);
            registry.register(&descriptor, constructor)?;
        }
        Ok(registry)
    }

    pub fn register(
        &mut self,
        descriptor: &OperatorDescriptor,
        constructor: Constructor<G>,
    ) -> Result<(), RegistryError> {
        if self.constructors.contains_key(&descriptor.public_name)
            || self.aliases.contains_key(&descriptor.internal_name)
        {
            return Err(RegistryError::AlreadyRegistered(
                descriptor.public_name.clone(),
            ));
        }
        debug!(
            op = %descriptor.public_name,
            opcode = %descriptor.internal_name,
            "registered operation constructor"
        );
        self.aliases.insert(
            descriptor.internal_name.clone(),
            descriptor.public_name.clone(),
        );
        self.constructors
            .insert(descriptor.public_name.clone(), constructor);
        Ok(())
    }

    fn resolve(&self, name: &str) -> Option<&Constructor<G>> {
        self.constructors.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|public| self.constructors.get(public))
        })
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Build the operation registered under `name` (public or internal).
    pub fn construct(
        &self,
        name: &str,
        graph: &G,
        node: &G::Node,
    ) -> Result<ElemBinOp<G::Node>, RegistryError> {
        let constructor = self
            .resolve(name)
            .ok_or_else(|| RegistryError::UnknownOperator(name.to_string()))?;
        constructor(graph, node)
    }

    /// Registered public names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<G> Default for OperationRegistry<G>
where
    G: OrderedChildren + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
