use super::{EnumBuilder, helper::str_lit, member_path, raw_lit, raw_text};
use crate::source::ValueKind;
use proc_macro2::{Literal, TokenStream};
use quote::quote;

// Compile-time staleness guard: the build fails once any member's value no
// longer matches the value seen at generation time.
pub fn generate(builder: &EnumBuilder) -> TokenStream {
    let checks = builder.members().iter().map(|m| {
        let path = member_path(m);
        let message = str_lit(&format!(
            "constant `{}` changed since generation; re-run enumerator",
            m.ident()
        ));

        match builder.kind() {
            ValueKind::Int => {
                let value = raw_lit(m);
                quote!(::std::assert!(#path.0 == #value, #message);)
            }
            ValueKind::Text => {
                let bytes = Literal::byte_string(raw_text(m).as_bytes());
                quote!(::std::assert!(same_bytes(#path.0.as_bytes(), #bytes), #message);)
            }
        }
    });

    let same_bytes = (builder.kind() == ValueKind::Text).then(|| {
        quote! {
            const fn same_bytes(a: &[u8], b: &[u8]) -> bool {
                if a.len() != b.len() {
                    return false;
                }
                let mut i = 0;
                while i < a.len() {
                    if a[i] != b[i] {
                        return false;
                    }
                    i += 1;
                }
                true
            }
        }
    });

    quote! {
        const _: () = {
            #same_bytes
            #(#checks)*
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codegen::tests::{contains, kind_spec, str_kind_spec},
        ident::Idents,
        node::EnumSpec,
    };

    fn emit(spec: &EnumSpec) -> String {
        let idents = Idents::choose(spec.target(), spec.members(), None).unwrap();

        generate(&EnumBuilder::new(spec, &idents)).to_string()
    }

    #[test]
    fn int_guard_compares_values() {
        let code = emit(&kind_spec());

        assert!(contains(
            &code,
            r#"::std::assert!(KIND_X.0 == 2, "constant `KIND_X` changed since generation; re-run enumerator");"#
        ));
        assert!(!code.contains("same_bytes"));
    }

    #[test]
    fn text_guard_compares_raw_bytes() {
        let code = emit(&str_kind_spec());

        // raw text, not the display override
        assert!(contains(&code, r#"same_bytes(BANG.0.as_bytes(), b"Bang")"#));
        assert!(contains(&code, "const fn same_bytes(a: &[u8], b: &[u8]) -> bool"));
    }
}
