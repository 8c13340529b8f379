//! Display-string resolution: trailing-comment overrides, then the
//! configured naming strategy.

use crate::{
    config::ConfigError,
    node::{ConstantBinding, NamedConstant},
    source::Comment,
};
use convert_case::{Case, Casing};
use derive_more::Display;
use std::str::FromStr;

///
/// NamingStrategy
/// Identifier-to-display transform used when no override comment applies.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum NamingStrategy {
    #[default]
    #[display("none")]
    Identity,

    #[display("camelCase")]
    Camel,

    #[display("PascalCase")]
    Pascal,

    #[display("snake_case")]
    Snake,

    #[display("UPPER_SNAKE_CASE")]
    UpperSnake,

    #[display("kebab-case")]
    Kebab,
}

impl NamingStrategy {
    pub const ALL: [Self; 6] = [
        Self::Identity,
        Self::Camel,
        Self::Pascal,
        Self::Snake,
        Self::UpperSnake,
        Self::Kebab,
    ];

    #[must_use]
    pub fn apply(self, ident: &str) -> String {
        let case = match self {
            Self::Identity => return ident.to_string(),
            Self::Camel => Case::Camel,
            Self::Pascal => Case::Pascal,
            Self::Snake => Case::Snake,
            Self::UpperSnake => Case::Constant,
            Self::Kebab => Case::Kebab,
        };

        ident.to_case(case)
    }
}

impl FromStr for NamingStrategy {
    type Err = ConfigError;

    // names are matched exactly, as they appear in the provenance header
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.to_string() == s)
            .ok_or_else(|| ConfigError::UnknownNamingStrategy(s.to_string()))
    }
}

/// Resolve the display string for `binding`.
///
/// `comments` are the records of the file declaring the binding, in file
/// order.
#[must_use]
pub fn resolve(
    binding: ConstantBinding,
    comments: &[Comment],
    strategy: NamingStrategy,
) -> NamedConstant {
    match find_override(&binding, comments) {
        Some(text) => NamedConstant {
            display: text.to_string(),
            overridden: true,
            binding,
        },
        None => NamedConstant {
            display: strategy.apply(binding.bare_ident()),
            overridden: false,
            binding,
        },
    }
}

// First non-empty comment at or after the group start, on the declaring line.
fn find_override<'a>(binding: &ConstantBinding, comments: &'a [Comment]) -> Option<&'a str> {
    comments
        .iter()
        .filter(|c| c.pos.offset >= binding.group_start.offset && c.pos.line == binding.pos.line)
        .map(|c| c.text.as_str())
        .find(|text| !text.is_empty())
}
