use cmpkit_registry::OperatorDescriptor;
use proc_macro2::TokenStream;
use quote::quote;

use super::ident;
use crate::error::Result;

/// `pub fn <name>(a: &Node) -> Result<Node, Error>`
pub(crate) fn render(descriptor: &OperatorDescriptor, opcode: &TokenStream) -> Result<TokenStream> {
    let fn_name = ident(&descriptor.fn_name())?;
    let doc = format!(
        " {} performs a pointwise {}.",
        descriptor.public_name,
        descriptor.public_name.to_lowercase()
    );

    Ok(quote! {
        #[doc = #doc]
        pub fn #fn_name(a: &Node) -> Result<Node, Error> {
            unary_op_node(ElemUnaryOp::new(#opcode, a), a)
        }
    })
}
