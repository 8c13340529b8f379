use crate::source::{Position, ValueKind};
use convert_case::{Case, Casing};

///
/// TargetType
/// The newtype being enumerated, resolved once per invocation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetType {
    pub name: String,
    pub kind: ValueKind,
    pub pos: Position,
}

impl TargetType {
    /// Bare name, without a raw identifier prefix.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        self.name.strip_prefix("r#").unwrap_or(&self.name)
    }

    /// Default output file name, `<snake_type>_enum.rs`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}_enum.rs", self.bare_name().to_case(Case::Snake))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FileId;

    fn target(name: &str) -> TargetType {
        TargetType {
            name: name.to_string(),
            kind: ValueKind::Int,
            pos: Position {
                file: FileId(0),
                line: 1,
                column: 0,
                offset: 0,
            },
        }
    }

    #[test]
    fn file_name_is_snake_case() {
        assert_eq!(target("StrKind").file_name(), "str_kind_enum.rs");
        assert_eq!(target("Kind").file_name(), "kind_enum.rs");
        assert_eq!(target("r#Match").file_name(), "match_enum.rs");
    }
}
