use super::EnumBuilder;
use proc_macro2::TokenStream;
use quote::quote;

// Static capability assertions
pub fn generate(builder: &EnumBuilder) -> TokenStream {
    let ty = builder.ty();

    quote! {
        const _: fn() = || {
            fn assert_capabilities<T>()
            where
                T: ::std::fmt::Display
                    + ::std::str::FromStr<Err = ::enumerator::ParseError>
                    + ::enumerator::Scan
                    + ::enumerator::TextMarshal
                    + ::enumerator::TextUnmarshal
                    + ::enumerator::Enumerated,
            {
            }

            assert_capabilities::<#ty>();
        };
    }
}
