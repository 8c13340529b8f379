//! Uniqueness checks that turn named constants into an `EnumSpec`.

pub mod reserved;

use crate::{
    ThisError,
    node::{EnumSpec, NamedConstant, TargetType},
    source::{ConstValue, ValueKind},
};
use std::collections::HashSet;

///
/// ValidationError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("duplicate display string found: {0:?}")]
    DuplicateDisplay(String),

    #[error("duplicate identifier found: {0:?}")]
    DuplicateIdent(String),

    #[error("display string collides with the identifier of another member: {0:?}")]
    DisplayCollidesWithIdent(String),

    #[error("duplicate value found: {0}")]
    DuplicateValue(ConstValue),

    #[error("no members to validate")]
    Empty,
}

/// Check every invariant of an `EnumSpec`, failing on the first violation.
///
/// Members are checked in order; for each one the display string, the
/// identifier, display/identifier collisions and finally the raw value.
pub fn validate(
    target: TargetType,
    kind: ValueKind,
    members: Vec<NamedConstant>,
) -> Result<EnumSpec, ValidationError> {
    if members.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut displays = HashSet::new();
    let mut idents = HashSet::new();
    let mut values = HashSet::new();

    for (i, member) in members.iter().enumerate() {
        if !displays.insert(member.display.as_str()) {
            return Err(ValidationError::DuplicateDisplay(member.display.clone()));
        }

        if !idents.insert(member.ident()) {
            return Err(ValidationError::DuplicateIdent(member.ident().to_string()));
        }

        let collides = members
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && other.binding.bare_ident() == member.display);
        if collides {
            return Err(ValidationError::DisplayCollidesWithIdent(
                member.display.clone(),
            ));
        }

        if !values.insert(member.value()) {
            return Err(ValidationError::DuplicateValue(member.value().clone()));
        }
    }

    tracing::trace!(type_name = %target.name, members = members.len(), "members validated");

    Ok(EnumSpec::new_unchecked(target, kind, members))
}
