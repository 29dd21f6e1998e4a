//! File header: banner and the external capabilities the wrappers use.

use proc_macro2::TokenStream;
use quote::quote;

/// First line of every generated file.
pub const BANNER: &str =
    "// Code generated by genapi, the API generation tool for cmpkit operators. DO NOT EDIT.";

/// `use` block for the graph, node and operation types the wrappers need.
///
/// Node, error and op-construction helpers come from the parent module.
pub(crate) fn uses() -> TokenStream {
    quote! {
        use super::*;
        use crate::graph::WeightedDirected;
        use crate::node::GraphNode;
        use crate::ops::{Op, Operation};
    }
}
