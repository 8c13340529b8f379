//! Collect every constant declared with the target type.

use crate::{
    Error, ThisError,
    node::{ConstantBinding, TargetType},
    source::{ConstDecl, ConstScope, SourceError, SourceModel, ValueKind},
};

///
/// ConsistencyError
/// Constants of one type disagree on their value kind.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("constant `{name}` at {location} is {found}, expected {expected}")]
pub struct ConsistencyError {
    pub name: String,
    pub location: String,
    pub expected: ValueKind,
    pub found: ValueKind,
}

/// Constants whose declared type is exactly `target`, in source order.
///
/// An empty result is returned as-is; the caller decides that nothing was
/// found. `_` constants are skipped.
pub fn discover(
    model: &SourceModel,
    target: &TargetType,
) -> Result<Vec<ConstantBinding>, Error> {
    let mut found = Vec::new();
    let mut expected = target.kind;

    for decl in model.consts() {
        if decl.name == "_" || !declares(decl, &target.name) {
            continue;
        }

        let value = decl.value.clone().ok_or_else(|| SourceError::Unevaluable {
            name: decl.name.clone(),
            location: model.describe(decl.pos),
        })?;

        if value.kind() != expected {
            return Err(ConsistencyError {
                name: decl.name.clone(),
                location: model.describe(decl.pos),
                expected,
                found: value.kind(),
            }
            .into());
        }
        expected = value.kind();

        found.push(ConstantBinding {
            ident: decl.name.clone(),
            value,
            pos: decl.pos,
            scope: decl.scope,
            owner: decl.owner.clone(),
            group_start: decl.group_start,
        });
    }

    found.sort_by(|a, b| model.order_key(a.pos).cmp(&model.order_key(b.pos)));

    tracing::debug!(type_name = %target.name, constants = found.len(), "constants discovered");

    Ok(found)
}

// `T`, `self::T`, `crate::T`, or `Self` inside `impl T`
fn declares(decl: &ConstDecl, type_name: &str) -> bool {
    match decl.ty.as_slice() {
        [ty] if ty == "Self" => {
            decl.scope == ConstScope::Associated && decl.owner.as_deref() == Some(type_name)
        }
        [ty] => ty == type_name,
        [scope, ty] => (scope == "self" || scope == "crate") && ty == type_name,
        _ => false,
    }
}
