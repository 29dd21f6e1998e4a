use cmpkit_registry::OperatorDescriptor;
use proc_macro2::TokenStream;
use quote::quote;

use super::ident;
use crate::error::Result;

/// Binary wrapper plus its `new_<name>_operation` graph factory.
///
/// Comparisons take a trailing `ret_same` switch selecting same-type output
/// over a boolean mask.
pub(crate) fn render(descriptor: &OperatorDescriptor, opcode: &TokenStream) -> Result<TokenStream> {
    let fn_name = ident(&descriptor.fn_name())?;
    let factory = ident(&format!("new_{}_operation", descriptor.fn_name()))?;
    let doc = format!(
        " {} performs a pointwise {} operation.",
        descriptor.public_name,
        descriptor.public_name.to_lowercase()
    );
    let factory_doc = format!(
        " Graph factory for [`{fn_name}`]: builds the op from the node's two ordered children."
    );

    let wrapper = if descriptor.needs_result_flag {
        quote! {
            #[doc = #doc]
            ///
            /// `ret_same` keeps the input element type for the result; otherwise
            /// the result is a boolean mask.
            pub fn #fn_name(a: &Node, b: &Node, ret_same: bool) -> Result<Node, Error> {
                let mut op = ElemBinOp::new(#opcode, a, b);
                op.ret_same = ret_same;
                bin_op_node(op, a, b)
            }
        }
    } else {
        quote! {
            #[doc = #doc]
            pub fn #fn_name(a: &Node, b: &Node) -> Result<Node, Error> {
                bin_op_node(ElemBinOp::new(#opcode, a, b), a, b)
            }
        }
    };

    Ok(quote! {
        #wrapper

        #[doc = #factory_doc]
        pub fn #factory() -> Operation {
            Box::new(|g: &dyn WeightedDirected, n: &GraphNode| -> Result<Box<dyn Op>, Error> {
                let children = ordered_children(g, n);
                Ok(Box::new(ElemBinOp::new(#opcode, &children[0], &children[1])))
            })
        }
    })
}
