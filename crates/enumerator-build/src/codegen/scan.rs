use super::{EnumBuilder, display_lit, member_path};
use proc_macro2::TokenStream;
use quote::quote;

// Scan + FromStr
pub fn generate(builder: &EnumBuilder) -> TokenStream {
    let ty = builder.ty();
    let type_name = builder.type_name();
    let input = &builder.idents.input;
    let token = &builder.idents.token;

    let arms = builder.members().iter().map(|m| {
        let display = display_lit(m);
        let path = member_path(m);

        quote!(#display => ::std::result::Result::Ok(#path))
    });

    quote! {
        impl ::enumerator::Scan for #ty {
            fn scan(#input: &mut &str) -> ::std::result::Result<Self, ::enumerator::ParseError> {
                let ::std::option::Option::Some(#token) = ::enumerator::scan::next_token(#input) else {
                    return ::std::result::Result::Err(::enumerator::ParseError::empty(#type_name));
                };

                match #token {
                    #(#arms,)*
                    _ => ::std::result::Result::Err(::enumerator::ParseError::unknown(#type_name, #token)),
                }
            }
        }

        impl ::std::str::FromStr for #ty {
            type Err = ::enumerator::ParseError;

            fn from_str(#input: &str) -> ::std::result::Result<Self, Self::Err> {
                let mut #input = #input;
                <Self as ::enumerator::Scan>::scan(&mut #input)
            }
        }
    }
}
