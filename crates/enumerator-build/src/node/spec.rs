use crate::{
    node::{NamedConstant, TargetType},
    source::ValueKind,
};

///
/// EnumSpec
///
/// Validated, ordered member set for one target type. Only the validator
/// builds one, so holding an `EnumSpec` means every uniqueness invariant
/// held at construction.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumSpec {
    target: TargetType,
    kind: ValueKind,
    members: Vec<NamedConstant>,
}

impl EnumSpec {
    pub(crate) const fn new_unchecked(
        target: TargetType,
        kind: ValueKind,
        members: Vec<NamedConstant>,
    ) -> Self {
        Self {
            target,
            kind,
            members,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &TargetType {
        &self.target
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Members in declaration order; never empty.
    #[must_use]
    pub fn members(&self) -> &[NamedConstant] {
        &self.members
    }

    #[must_use]
    pub fn first(&self) -> &NamedConstant {
        &self.members[0]
    }

    #[must_use]
    pub fn any_override(&self) -> bool {
        self.members.iter().any(|m| m.overridden)
    }
}
