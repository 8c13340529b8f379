use crate::source::{ConstScope, ConstValue, Position};

///
/// ConstantBinding
/// One constant of the target type, as found in the source model.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstantBinding {
    pub ident: String,
    pub value: ConstValue,
    pub pos: Position,
    pub scope: ConstScope,
    pub owner: Option<String>,
    pub group_start: Position,
}

impl ConstantBinding {
    /// Identifier without a raw identifier prefix; naming strategies work on this.
    #[must_use]
    pub fn bare_ident(&self) -> &str {
        self.ident.strip_prefix("r#").unwrap_or(&self.ident)
    }
}

///
/// NamedConstant
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedConstant {
    pub binding: ConstantBinding,
    pub display: String,

    /// display came from a trailing comment rather than the naming strategy
    pub overridden: bool,
}

impl NamedConstant {
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.binding.ident
    }

    #[must_use]
    pub const fn value(&self) -> &ConstValue {
        &self.binding.value
    }
}
