//! Template emission.
//!
//! Each descriptor renders to a token stream; the assembled file is
//! re-parsed with `syn` and printed with `prettyplease`, so malformed output
//! fails the run instead of reaching disk.

mod binary;
mod header;
mod unary;

use cmpkit_registry::{Arity, OperatorDescriptor};
use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;
use tracing::{debug, info};

use crate::error::{GenError, Result};

pub use header::BANNER;

/// The descriptors of one arity and how their opcodes are spelled.
#[derive(Debug, Clone, Copy)]
pub struct Family<'a> {
    pub arity: Arity,
    pub descriptors: &'a [OperatorDescriptor],
    /// Opcode type name (`BinaryOperatorType`)
    pub opcode_type: &'a str,
    /// `Type::Opcode` when true, bare `Opcode` otherwise
    pub qualified: bool,
}

impl Family<'_> {
    /// Path expression naming `descriptor`'s opcode.
    fn opcode(&self, descriptor: &OperatorDescriptor) -> Result<TokenStream> {
        let opcode = ident(&descriptor.internal_name)?;
        if self.qualified {
            let ty = ident(self.opcode_type)?;
            Ok(quote! { #ty::#opcode })
        } else {
            Ok(quote! { #opcode })
        }
    }
}

/// Render the unary family, then the binary family, into one source file.
pub fn render_file(unary: Family<'_>, binary: Family<'_>) -> Result<String> {
    let mut tokens = header::uses();
    for family in [unary, binary] {
        for descriptor in family.descriptors {
            let opcode = family.opcode(descriptor)?;
            tokens.extend(match family.arity {
                Arity::Unary => unary::render(descriptor, &opcode)?,
                Arity::Binary => binary::render(descriptor, &opcode)?,
            });
            debug!(op = %descriptor.public_name, opcode = %descriptor.internal_name, "rendered");
        }
        info!(arity = %family.arity, operators = family.descriptors.len(), "rendered operator family");
    }

    let file: syn::File = syn::parse2(tokens).map_err(|err| GenError::TemplateRender {
        name: "generated file".to_string(),
        reason: err.to_string(),
    })?;
    Ok(format!("{BANNER}\n\n{}", prettyplease::unparse(&file)))
}

/// Keywords that have no raw form.
const NON_RAW_KEYWORDS: &[&str] = &["_", "crate", "self", "Self", "super"];

/// Parse `name` as a Rust identifier.
///
/// Keywords come back as raw identifiers (`r#match`). Path keywords and
/// non-identifiers fail.
pub(crate) fn ident(name: &str) -> Result<Ident> {
    let err = match syn::parse_str::<Ident>(name) {
        Ok(ident) => return Ok(ident),
        Err(err) => err,
    };
    if !NON_RAW_KEYWORDS.contains(&name) {
        if let Ok(raw) = syn::parse_str::<Ident>(&format!("r#{name}")) {
            debug!(name, "escaping keyword as raw identifier");
            return Ok(raw);
        }
    }
    Err(GenError::TemplateRender {
        name: name.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use cmpkit_registry::normalize_catalog;

    use super::*;

    #[test]
    fn test_ident_escapes_keywords() {
        assert_eq!(ident("hadamard_prod").unwrap().to_string(), "hadamard_prod");
        assert_eq!(ident("type").unwrap().to_string(), "r#type");
        assert_eq!(ident("match").unwrap().to_string(), "r#match");
        for name in ["self", "Self", "super", "crate", "_", "2d", "", "a-b"] {
            assert!(
                matches!(ident(name), Err(GenError::TemplateRender { .. })),
                "`{name}` should not render"
            );
        }
    }

    #[test]
    fn test_bare_and_qualified_opcodes() {
        let binary = normalize_catalog(["AddOpType"], Arity::Binary).unwrap();
        let mut family = Family {
            arity: Arity::Binary,
            descriptors: &binary,
            opcode_type: "BinaryOperatorType",
            qualified: true,
        };
        let qualified = family.opcode(&binary[0]).unwrap().to_string();
        assert_eq!(qualified, "BinaryOperatorType :: AddOpType");
        family.qualified = false;
        assert_eq!(family.opcode(&binary[0]).unwrap().to_string(), "AddOpType");
    }

    #[test]
    fn test_banner_comes_first() {
        let unary = normalize_catalog(["AbsOpType"], Arity::Unary).unwrap();
        let out = render_file(
            Family {
                arity: Arity::Unary,
                descriptors: &unary,
                opcode_type: "UnaryOperatorType",
                qualified: true,
            },
            Family {
                arity: Arity::Binary,
                descriptors: &[],
                opcode_type: "BinaryOperatorType",
                qualified: true,
            },
        )
        .unwrap();
        assert!(out.starts_with(BANNER));
        assert!(out.contains("use crate::ops::{Op, Operation};"));
        assert!(out.contains("pub fn abs(a: &Node) -> Result<Node, Error>"));
    }
}
