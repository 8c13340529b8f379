//! Resolve the target newtype, by name or by the closest following
//! declaration.

use crate::{
    ThisError,
    node::TargetType,
    source::{Binding, DeclKind, SourceModel, TypeShape},
};
use std::path::{Path, PathBuf};

///
/// ResolutionError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ResolutionError {
    #[error("type {0:?} not found")]
    NotFound(String),

    #[error("closest declaration at or after line {line} is {kind} `{name}`, not a type")]
    NotAType {
        name: String,
        kind: String,
        line: usize,
    },

    #[error("no declaration at or after line {line} of {}", path.display())]
    NoDeclaration { path: PathBuf, line: usize },

    #[error("{} is not part of the loaded sources", .0.display())]
    FileNotLoaded(PathBuf),

    #[error("type `{name}` cannot be enumerated: it is {reason}")]
    Unsupported { name: String, reason: String },
}

/// Find the first named type called `name`.
pub fn by_name(model: &SourceModel, name: &str) -> Result<TargetType, ResolutionError> {
    let binding = model
        .type_decl(name)
        .ok_or_else(|| ResolutionError::NotFound(name.to_string()))?;

    target(binding)
}

/// Find the declaration closest at or after `line` in `path`.
///
/// Among several declarations on that line the first in source order is
/// taken, and it has to be a type.
pub fn by_position(
    model: &SourceModel,
    path: &Path,
    line: usize,
) -> Result<TargetType, ResolutionError> {
    let file = model
        .find_file(path)
        .ok_or_else(|| ResolutionError::FileNotLoaded(path.to_path_buf()))?;

    // bindings are already sorted by offset within a file
    let closest = model
        .bindings()
        .iter()
        .filter(|b| b.pos.file == file && b.pos.line >= line)
        .min_by_key(|b| (b.pos.line, b.pos.offset))
        .ok_or_else(|| ResolutionError::NoDeclaration {
            path: path.to_path_buf(),
            line,
        })?;

    if closest.kind != DeclKind::Type {
        return Err(ResolutionError::NotAType {
            name: closest.name.clone(),
            kind: closest.kind.to_string(),
            line,
        });
    }

    target(closest)
}

fn target(binding: &Binding) -> Result<TargetType, ResolutionError> {
    let kind = match &binding.shape {
        Some(TypeShape::Newtype(kind)) => *kind,
        Some(TypeShape::Unsupported(reason)) => {
            return Err(ResolutionError::Unsupported {
                name: binding.name.clone(),
                reason: reason.clone(),
            });
        }
        None => unreachable!("type binding `{}` without a shape", binding.name),
    };

    tracing::debug!(type_name = %binding.name, %kind, line = binding.pos.line, "target type resolved");

    Ok(TargetType {
        name: binding.name.clone(),
        kind,
        pos: binding.pos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ValueKind;

    const SRC: &str = "\
pub fn helper() {}

/// doc comments are attributes
pub struct Kind(pub u8);

pub const A: Kind = Kind(0);

pub struct Wide { pub x: u8 }

pub struct One(pub u8); pub struct Two(pub u8);
pub const B: Kind = Kind(1); pub struct Late(pub u8);
";

    fn model() -> SourceModel {
        SourceModel::parse([("src/lib.rs", SRC)]).unwrap()
    }

    #[test]
    fn by_name_finds_newtype() {
        let target = by_name(&model(), "Kind").unwrap();

        assert_eq!(target.name, "Kind");
        assert_eq!(target.kind, ValueKind::Int);
        assert_eq!(target.pos.line, 4);
    }

    #[test]
    fn by_name_missing() {
        assert_eq!(
            by_name(&model(), "Nope"),
            Err(ResolutionError::NotFound("Nope".to_string()))
        );
    }

    #[test]
    fn by_name_does_not_match_constants() {
        assert!(matches!(
            by_name(&model(), "A"),
            Err(ResolutionError::NotFound(_))
        ));
    }

    #[test]
    fn by_name_rejects_unsupported_shape() {
        let err = by_name(&model(), "Wide").unwrap_err();

        assert!(matches!(err, ResolutionError::Unsupported { ref name, .. } if name == "Wide"));
    }

    #[test]
    fn by_position_skips_blank_and_doc_lines() {
        let target = by_position(&model(), Path::new("src/lib.rs"), 2).unwrap();

        assert_eq!(target.name, "Kind");
    }

    #[test]
    fn by_position_reports_non_type() {
        let err = by_position(&model(), Path::new("src/lib.rs"), 5).unwrap_err();

        assert_eq!(err, ResolutionError::NotAType {
            name: "A".to_string(),
            kind: "const".to_string(),
            line: 5,
        });
    }

    #[test]
    fn by_position_same_line_takes_first() {
        let target = by_position(&model(), Path::new("src/lib.rs"), 10).unwrap();
        assert_eq!(target.name, "One");

        // a constant first on the line is never skipped for a later type
        let err = by_position(&model(), Path::new("src/lib.rs"), 11).unwrap_err();
        assert!(matches!(err, ResolutionError::NotAType { ref name, .. } if name == "B"));
    }

    #[test]
    fn by_position_past_the_end() {
        let err = by_position(&model(), Path::new("src/lib.rs"), 99).unwrap_err();

        assert!(matches!(err, ResolutionError::NoDeclaration { line: 99, .. }));
    }

    #[test]
    fn by_position_unknown_file() {
        let err = by_position(&model(), Path::new("src/other.rs"), 1).unwrap_err();

        assert_eq!(err, ResolutionError::FileNotLoaded(PathBuf::from("src/other.rs")));
    }
}
