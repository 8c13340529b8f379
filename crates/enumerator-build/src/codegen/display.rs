use super::{EnumBuilder, display_lit, raw_lit, renamed};
use crate::source::ValueKind;
use proc_macro2::TokenStream;
use quote::quote;

// Display
pub fn generate(builder: &EnumBuilder) -> TokenStream {
    let ty = builder.ty();
    let f = &builder.idents.formatter;

    let body = match builder.kind() {
        ValueKind::Int => int_body(builder),
        ValueKind::Text => text_body(builder),
    };

    quote! {
        impl ::std::fmt::Display for #ty {
            fn fmt(&self, #f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #body
            }
        }
    }
}

// dispatch by value; anything undeclared prints as `Type(n)`
fn int_body(builder: &EnumBuilder) -> TokenStream {
    let f = &builder.idents.formatter;
    let r = &builder.idents.receiver;
    let fallback = format!("{}({{}})", builder.spec.target().bare_name());

    let arms = builder.members().iter().map(|m| {
        let value = raw_lit(m);
        let display = display_lit(m);

        quote!(#value => #f.pad(#display))
    });

    quote! {
        match self.0 {
            #(#arms,)*
            #r => ::std::write!(#f, #fallback, #r),
        }
    }
}

// renamed members dispatch by raw text; everything else prints the raw text
fn text_body(builder: &EnumBuilder) -> TokenStream {
    let f = &builder.idents.formatter;
    let r = &builder.idents.receiver;
    let renamed: Vec<_> = renamed(builder.members()).collect();

    if renamed.is_empty() {
        return quote!(#f.pad(self.0));
    }

    let arms = renamed.iter().map(|m| {
        let value = raw_lit(m);
        let display = display_lit(m);

        quote!(#value => #f.pad(#display))
    });

    quote! {
        match self.0 {
            #(#arms,)*
            #r => #f.pad(#r),
        }
    }
}
