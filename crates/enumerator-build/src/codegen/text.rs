use super::{EnumBuilder, display_bytes, member_path};
use proc_macro2::TokenStream;
use quote::quote;

// TextMarshal + TextUnmarshal
pub fn generate(builder: &EnumBuilder) -> TokenStream {
    let ty = builder.ty();
    let type_name = builder.type_name();
    let text = &builder.idents.text;

    let arms = builder.members().iter().map(|m| {
        let bytes = display_bytes(m);
        let path = member_path(m);

        quote!(#bytes => #path)
    });

    quote! {
        impl ::enumerator::TextMarshal for #ty {
            fn marshal_text(&self) -> ::std::borrow::Cow<'static, [u8]> {
                Self::as_bytes(self)
            }
        }

        impl ::enumerator::TextUnmarshal for #ty {
            fn unmarshal_text(&mut self, #text: &[u8]) -> ::std::result::Result<(), ::enumerator::UnmarshalError> {
                *self = match #text {
                    #(#arms,)*
                    _ => return ::std::result::Result::Err(::enumerator::UnmarshalError::new(#type_name, #text)),
                };

                ::std::result::Result::Ok(())
            }
        }
    }
}
