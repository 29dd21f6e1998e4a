//! Operator catalog extraction.
//!
//! Reads the opcode declarations of one arity from a Rust source file. Two
//! declaration forms are recognized at the top level of the file:
//!
//! ```ignore
//! pub enum BinaryOperatorType { AddOpType, SubOpType, MaxBinaryOpType }
//!
//! pub const AddOpType: BinaryOperatorType = BinaryOperatorType(0);
//! pub const SubOpType: BinaryOperatorType = BinaryOperatorType(1);
//! ```
//!
//! The first group whose type matches wins.

use std::fs;
use std::path::Path;

use syn::ext::IdentExt;
use syn::{Fields, Ident, Item, ItemConst, ItemEnum, Type};
use tracing::{debug, warn};

use crate::error::{GenError, Result};

/// How a declaration group spells its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Fieldless enum; members are referenced as `Type::Member`
    Enum,
    /// Run of top-level consts; members are referenced bare
    Consts,
}

/// The matched declaration group, sentinel removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationGroup {
    pub kind: GroupKind,
    pub names: Vec<String>,
}

/// Read and parse a declaration source. Both failures are fatal.
pub fn parse_source(path: &Path) -> Result<syn::File> {
    let text = fs::read_to_string(path).map_err(|source| GenError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    syn::parse_file(&text).map_err(|source| GenError::SourceParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Ordered opcode identifiers of the first group declared with `type_name`,
/// skipping `sentinel`. Empty when no group matches.
pub fn extract_catalog(file: &syn::File, type_name: &str, sentinel: &str) -> Vec<String> {
    match find_group(file, type_name, sentinel) {
        Some(group) => group.names,
        None => Vec::new(),
    }
}

/// Locate the first group declared with `type_name`.
pub fn find_group(file: &syn::File, type_name: &str, sentinel: &str) -> Option<DeclarationGroup> {
    let mut items = file.items.iter().peekable();
    while let Some(item) = items.next() {
        let (kind, members): (GroupKind, Vec<&Ident>) = match item {
            Item::Enum(item) if is_catalog_enum(item, type_name) => (
                GroupKind::Enum,
                item.variants.iter().map(|v| &v.ident).collect(),
            ),
            Item::Const(item) if declares_type(item, type_name) => {
                let mut run = vec![&item.ident];
                while let Some(Item::Const(next)) =
                    items.next_if(|next| is_catalog_const(next, type_name))
                {
                    run.push(&next.ident);
                }
                (GroupKind::Consts, run)
            }
            _ => continue,
        };

        let names: Vec<String> = members
            .into_iter()
            .map(|ident| ident.unraw().to_string())
            .filter(|name| name != sentinel)
            .collect();
        debug!(group = type_name, ?kind, operators = names.len(), "found declaration group");
        return Some(DeclarationGroup { kind, names });
    }

    warn!(group = type_name, "no declaration group found, catalog is empty");
    None
}

fn is_catalog_enum(item: &ItemEnum, type_name: &str) -> bool {
    item.ident == type_name && item.variants.iter().all(|v| matches!(v.fields, Fields::Unit))
}

fn is_catalog_const(item: &Item, type_name: &str) -> bool {
    matches!(item, Item::Const(item) if declares_type(item, type_name))
}

fn declares_type(item: &ItemConst, type_name: &str) -> bool {
    match item.ty.as_ref() {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == type_name),
        _ => false,
    }
}
