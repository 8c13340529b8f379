//! Names for the bindings generated code introduces.

use crate::{
    config::ConfigError,
    node::{NamedConstant, TargetType},
    validate::reserved::is_reserved_word,
};
use proc_macro2::Ident;
use quote::format_ident;
use std::collections::HashSet;
use syn::ext::IdentExt;

///
/// Idents
///
/// `receiver` binds the fallback value in generated `match` arms; the
/// others name the formatter, scan cursor, scanned token and unmarshal
/// input.
///

#[derive(Clone, Debug)]
pub struct Idents {
    pub receiver: Ident,
    pub formatter: Ident,
    pub input: Ident,
    pub token: Ident,
    pub text: Ident,
}

impl Idents {
    /// Pick every binding name, avoiding reserved words, member identifiers,
    /// the type name and each other.
    pub fn choose(
        target: &TargetType,
        members: &[NamedConstant],
        receiver: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let receiver = match receiver {
            Some(r) => {
                check_ident(r)?;
                r.to_string()
            }
            None => default_receiver(target.bare_name()),
        };

        let mut taken: HashSet<String> = members.iter().map(|m| m.ident().to_string()).collect();
        taken.insert(target.name.clone());

        let mut pick = |want: &str| {
            let name = safe_ident(want, &taken);
            taken.insert(name.clone());
            format_ident!("{name}")
        };

        Ok(Self {
            receiver: pick(&receiver),
            formatter: pick("f"),
            input: pick("input"),
            token: pick("token"),
            text: pick("text"),
        })
    }
}

/// First character of the type name, lower-cased.
#[must_use]
pub fn default_receiver(type_name: &str) -> String {
    type_name
        .chars()
        .next()
        .map_or_else(|| "v".to_string(), |c| c.to_lowercase().collect())
}

/// Prefix `_` until `want` is neither reserved, `_`, nor already taken.
#[must_use]
pub fn safe_ident(want: &str, taken: &HashSet<String>) -> String {
    let mut name = want.to_string();

    while name == "_" || is_reserved_word(&name) || taken.contains(&name) {
        name.insert(0, '_');
    }

    name
}

// keywords are accepted here; `safe_ident` prefixes them afterwards
fn check_ident(s: &str) -> Result<(), ConfigError> {
    syn::parse::Parser::parse_str(Ident::parse_any, s)
        .map(|_| ())
        .map_err(|_| ConfigError::InvalidReceiver(s.to_string()))
}
