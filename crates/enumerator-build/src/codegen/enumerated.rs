use super::{EnumBuilder, member_path};
use proc_macro2::{Literal, TokenStream};
use quote::quote;

// Enumerated
pub fn generate(builder: &EnumBuilder) -> TokenStream {
    let ty = builder.ty();
    let type_name = builder.type_name();
    let first = member_path(builder.spec.first());
    let len = Literal::usize_unsuffixed(builder.members().len());

    quote! {
        impl ::enumerator::Enumerated for #ty {
            const TYPE_NAME: &'static str = #type_name;
            const FIRST: Self = #first;
            const LEN: usize = #len;

            fn next(&self) -> Self {
                Self::next(self)
            }

            fn is_defined(&self) -> bool {
                Self::is_defined(self)
            }
        }
    }
}
