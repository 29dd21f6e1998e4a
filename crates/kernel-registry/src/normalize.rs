//! Public-name normalization.
//!
//! Opcode identifiers become API names by dropping the [`OPCODE_SUFFIX`],
//! upper-casing the first letter and applying a small override table kept for
//! compatibility with the established API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::operator::Arity;

/// Suffix every opcode identifier carries.
pub const OPCODE_SUFFIX: &str = "OpType";

const UNARY_OVERRIDES: &[(&str, &str)] = &[("Ln", "Log")];

const BINARY_OVERRIDES: &[(&str, &str)] = &[("Mul", "HadamardProd"), ("Div", "HadamardDiv")];

/// Operators whose binary wrapper takes a `ret_same` switch.
const RESULT_FLAG_NAMES: &[&str] = &["Lt", "Gt", "Lte", "Gte", "Eq", "Ne"];

/// A catalog entry after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorDescriptor {
    /// Opcode identifier as declared
    pub internal_name: String,
    /// API name
    pub public_name: String,
    /// Operand count
    pub arity: Arity,
    /// Whether the wrapper lets callers pick mask vs same-type output
    pub needs_result_flag: bool,
}

impl OperatorDescriptor {
    pub fn new(internal_name: impl Into<String>, arity: Arity) -> Self {
        let internal_name = internal_name.into();
        let public_name = public_name(&internal_name, arity);
        let needs_result_flag = arity == Arity::Binary && needs_result_flag(&public_name);
        Self {
            internal_name,
            public_name,
            arity,
            needs_result_flag,
        }
    }

    /// Rust function identifier for the generated wrapper.
    pub fn fn_name(&self) -> String {
        snake_case(&self.public_name)
    }
}

/// Upper-case the first character.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// API name for an opcode identifier.
pub fn public_name(internal_name: &str, arity: Arity) -> String {
    let stem = capitalize(
        internal_name
            .strip_suffix(OPCODE_SUFFIX)
            .unwrap_or(internal_name),
    );
    let overrides = match arity {
        Arity::Unary => UNARY_OVERRIDES,
        Arity::Binary => BINARY_OVERRIDES,
    };
    overrides
        .iter()
        .find(|(from, _)| *from == stem)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(stem)
}

/// Whether a public name selects the mask/same-type switch.
pub fn needs_result_flag(public_name: &str) -> bool {
    RESULT_FLAG_NAMES.contains(&public_name)
}

/// `HadamardProd` → `hadamard_prod`, `Log1p` → `log1p`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_uppercase() {
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Normalize an ordered list of opcode identifiers.
///
/// Fails when two distinct identifiers land on the same public name, or on
/// public names that snake_case to the same function (`Abc` and `ABC`).
pub fn normalize_catalog<I, S>(
    names: I,
    arity: Arity,
) -> Result<Vec<OperatorDescriptor>, RegistryError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut public_names: HashMap<String, String> = HashMap::new();
    let mut fn_names: HashMap<String, String> = HashMap::new();
    let mut out = Vec::new();
    for name in names {
        let descriptor = OperatorDescriptor::new(name.as_ref(), arity);
        if let Some(first) = public_names.get(&descriptor.public_name) {
            return Err(RegistryError::DuplicatePublicName {
                public_name: descriptor.public_name,
                first: first.clone(),
                second: descriptor.internal_name,
            });
        }
        let fn_name = descriptor.fn_name();
        if let Some(first) = fn_names.get(&fn_name) {
            return Err(RegistryError::DuplicateFnName {
                fn_name,
                first: first.clone(),
                second: descriptor.internal_name,
            });
        }
        public_names.insert(
            descriptor.public_name.clone(),
            descriptor.internal_name.clone(),
        );
        fn_names.insert(fn_name, descriptor.internal_name.clone());
        out.push(descriptor);
    }
    Ok(out)
}
