use super::{EnumBuilder, display_bytes, member_path, raw_lit, renamed};
use crate::source::ValueKind;
use proc_macro2::TokenStream;
use quote::quote;

// Inherent `as_bytes`, `is_defined` and `next`
pub fn generate(builder: &EnumBuilder) -> TokenStream {
    let ty = builder.ty();
    let as_bytes = as_bytes(builder);
    let is_defined = is_defined(builder);
    let next = next(builder);

    quote! {
        impl #ty {
            #as_bytes
            #is_defined
            #next
        }
    }
}

// same dispatch as Display, with the byte strings embedded
fn as_bytes(builder: &EnumBuilder) -> TokenStream {
    let r = &builder.idents.receiver;

    let body = match builder.kind() {
        ValueKind::Int => {
            let fallback = format!("{}({{}})", builder.spec.target().bare_name());
            let arms = builder.members().iter().map(|m| {
                let value = raw_lit(m);
                let bytes = display_bytes(m);

                quote!(#value => ::std::borrow::Cow::Borrowed(#bytes))
            });

            quote! {
                match self.0 {
                    #(#arms,)*
                    #r => ::std::borrow::Cow::Owned(::std::format!(#fallback, #r).into_bytes()),
                }
            }
        }

        ValueKind::Text => {
            let renamed: Vec<_> = renamed(builder.members()).collect();

            if renamed.is_empty() {
                quote!(::std::borrow::Cow::Borrowed(self.0.as_bytes()))
            } else {
                let arms = renamed.iter().map(|m| {
                    let value = raw_lit(m);
                    let bytes = display_bytes(m);

                    quote!(#value => ::std::borrow::Cow::Borrowed(#bytes))
                });

                quote! {
                    match self.0 {
                        #(#arms,)*
                        #r => ::std::borrow::Cow::Borrowed(#r.as_bytes()),
                    }
                }
            }
        }
    };

    quote! {
        /// UTF-8 bytes of the `Display` output.
        #[must_use]
        pub fn as_bytes(&self) -> ::std::borrow::Cow<'static, [u8]> {
            #body
        }
    }
}

fn is_defined(builder: &EnumBuilder) -> TokenStream {
    let constness = builder.constness();
    let values = builder.members().iter().map(raw_lit);

    quote! {
        /// Whether the value is one of the declared constants.
        #[must_use]
        pub #constness fn is_defined(&self) -> bool {
            ::std::matches!(self.0, #(#values)|*)
        }
    }
}

// each member maps to the following one; the last and anything undeclared
// map to the first
fn next(builder: &EnumBuilder) -> TokenStream {
    let constness = builder.constness();
    let members = builder.members();
    let first = member_path(builder.spec.first());

    let arms = members.windows(2).map(|pair| {
        let value = raw_lit(&pair[0]);
        let next = member_path(&pair[1]);

        quote!(#value => #next)
    });

    quote! {
        /// Next declared constant, wrapping to the first.
        #[must_use]
        pub #constness fn next(&self) -> Self {
            match self.0 {
                #(#arms,)*
                _ => #first,
            }
        }
    }
}
