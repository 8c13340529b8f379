use crate::source::ConstValue;
use num_bigint::{BigInt, Sign};
use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::{LitInt, LitStr};

// Literal helpers

/// Unsuffixed integer literal; negative values get a leading `-` token.
pub fn int_lit(n: &BigInt) -> TokenStream {
    let digits = LitInt::new(&n.magnitude().to_string(), Span::call_site());

    if n.sign() == Sign::Minus {
        quote!(-#digits)
    } else {
        quote!(#digits)
    }
}

pub fn str_lit(s: &str) -> LitStr {
    LitStr::new(s, Span::call_site())
}

pub fn byte_str_lit(s: &str) -> Literal {
    Literal::byte_string(s.as_bytes())
}

/// Pattern / expression for a raw member value.
pub fn value_lit(value: &ConstValue) -> TokenStream {
    match value {
        ConstValue::Int(n) => int_lit(n),
        ConstValue::Text(s) => {
            let lit = str_lit(s);
            quote!(#lit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_ints_keep_their_sign() {
        assert_eq!(int_lit(&BigInt::from(-42)).to_string(), "- 42");
        assert_eq!(int_lit(&BigInt::from(7)).to_string(), "7");
    }

    #[test]
    fn huge_ints_stay_exact() {
        let n: BigInt = "340282366920938463463374607431768211455".parse().unwrap();

        assert_eq!(int_lit(&n).to_string(), "340282366920938463463374607431768211455");
    }

    #[test]
    fn text_literals_are_escaped() {
        assert_eq!(str_lit("a\"b").token().to_string(), r#""a\"b""#);
        assert_eq!(byte_str_lit("Bang").to_string(), r#"b"Bang""#);
    }
}
