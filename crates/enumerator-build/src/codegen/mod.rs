//! Code synthesis: one token stream per validated `EnumSpec`.
//!
//! Output is a pure function of the `EnumSpec` and the chosen identifiers. It
//! refers to the runtime crate by absolute path (`::enumerator::…`) and to
//! members by their declared path, so it must be `include!`d in the module
//! that declares the type.

mod assert;
mod display;
mod enumerated;
mod guard;
mod helper;
mod inherent;
mod scan;
mod text;

use crate::{
    ThisError,
    ident::Idents,
    node::{EnumSpec, NamedConstant},
    source::{ConstScope, ConstValue, ValueKind},
};
use helper::{byte_str_lit, str_lit, value_lit};
use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, format_ident, quote};
use syn::{Ident, LitStr};

///
/// EmitError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum EmitError {
    #[error("no constants of type {0:?} found")]
    NoConstants(String),
}

///
/// EnumBuilder
///

pub struct EnumBuilder<'a> {
    pub spec: &'a EnumSpec,
    pub idents: &'a Idents,
}

impl<'a> EnumBuilder<'a> {
    #[must_use]
    pub const fn new(spec: &'a EnumSpec, idents: &'a Idents) -> Self {
        Self { spec, idents }
    }

    /// Emit every capability block, in a fixed order.
    #[must_use]
    pub fn generate(&self) -> TokenStream {
        let mut tokens = quote!();

        tokens.extend(display::generate(self));
        tokens.extend(inherent::generate(self));
        tokens.extend(scan::generate(self));
        tokens.extend(text::generate(self));
        tokens.extend(enumerated::generate(self));
        tokens.extend(guard::generate(self));
        tokens.extend(assert::generate(self));

        tokens
    }

    //
    // shared pieces
    //

    fn ty(&self) -> Ident {
        format_ident!("{}", self.spec.target().name)
    }

    // name used in messages and fallbacks
    fn type_name(&self) -> LitStr {
        str_lit(self.spec.target().bare_name())
    }

    const fn kind(&self) -> ValueKind {
        self.spec.kind()
    }

    fn members(&self) -> &[NamedConstant] {
        self.spec.members()
    }

    // `const` for integral enumerations; string matching is not const
    fn constness(&self) -> Option<TokenStream> {
        (self.kind() == ValueKind::Int).then(|| quote!(const))
    }
}

impl ToTokens for EnumBuilder<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.generate());
    }
}

/// Path naming a member: `A` or `Owner::A`.
fn member_path(member: &NamedConstant) -> TokenStream {
    let ident = format_ident!("{}", member.binding.ident);

    match (&member.binding.scope, &member.binding.owner) {
        (ConstScope::Associated, Some(owner)) => {
            let owner = format_ident!("{owner}");
            quote!(#owner::#ident)
        }
        _ => quote!(#ident),
    }
}

fn raw_lit(member: &NamedConstant) -> TokenStream {
    value_lit(member.value())
}

fn display_lit(member: &NamedConstant) -> LitStr {
    str_lit(&member.display)
}

fn display_bytes(member: &NamedConstant) -> Literal {
    byte_str_lit(&member.display)
}

// Raw text of a member in a text enumeration.
fn raw_text(member: &NamedConstant) -> &str {
    match member.value() {
        ConstValue::Text(s) => s,
        ConstValue::Int(_) => unreachable!(
            "integral member `{}` in a text enumeration",
            member.ident()
        ),
    }
}

// Text members whose display differs from the raw text; only these need
// dispatching in text enumerations.
fn renamed(members: &[NamedConstant]) -> impl Iterator<Item = &NamedConstant> {
    members.iter().filter(|m| raw_text(m) != m.display)
}

/// Prefix `code` with the provenance header.
#[must_use]
pub fn render(code: &TokenStream, command: &str) -> String {
    format!("// Code generated by enumerator; DO NOT EDIT.\n// Command: {command}\n\n{code}\n")
}
