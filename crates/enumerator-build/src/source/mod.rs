//! Source model: parsed files, a position-indexed symbol table, exact
//! constant values and comment records.
//!
//! Loading is a blocking, single-shot step; everything downstream works on
//! the immutable snapshot it produces.

pub mod comments;
pub mod eval;
mod symbols;

pub use eval::{ConstValue, ValueKind};

use crate::ThisError;
use derive_more::Display;
use eval::{ConstKey, Evaluator};
use proc_macro2::LineColumn;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

///
/// SourceError
///

#[derive(Debug, ThisError)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse {}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("value of constant `{name}` at {location} cannot be evaluated exactly")]
    Unevaluable { name: String, location: String },
}

///
/// FileId
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FileId(pub usize);

///
/// Position
/// `line` is 1-based, `column` counts chars from 0, `offset` is in bytes.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    pub file: FileId,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

///
/// Comment
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    pub pos: Position,
    pub text: String,
}

///
/// SourceFile
///

#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub comments: Vec<Comment>,
    line_starts: Vec<usize>,
}

impl SourceFile {
    fn new(id: FileId, path: PathBuf, text: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        let mut file = Self {
            path,
            comments: Vec::new(),
            line_starts,
        };
        let comments = comments::scan(text)
            .into_iter()
            .map(|raw| Comment {
                pos: file.position_of_offset(id, raw.offset, text),
                text: raw.text,
            })
            .collect();
        file.comments = comments;

        file
    }

    // Byte offset for a proc-macro2 line/column (chars) pair.
    fn position(&self, id: FileId, lc: LineColumn, text: &str) -> Position {
        let line_start = self
            .line_starts
            .get(lc.line.saturating_sub(1))
            .copied()
            .unwrap_or(text.len());
        let offset = text[line_start..]
            .char_indices()
            .nth(lc.column)
            .map_or(text.len(), |(i, _)| line_start + i);

        Position {
            file: id,
            line: lc.line,
            column: lc.column,
            offset,
        }
    }

    fn position_of_offset(&self, id: FileId, offset: usize, text: &str) -> Position {
        let line = self.line_starts.partition_point(|start| *start <= offset);
        let line_start = self.line_starts[line - 1];

        Position {
            file: id,
            line,
            column: text[line_start..offset].chars().count(),
            offset,
        }
    }
}

///
/// DeclKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum DeclKind {
    #[display("type")]
    Type,
    #[display("const")]
    Const,
    #[display("static")]
    Static,
    #[display("fn")]
    Fn,
    #[display("trait")]
    Trait,
    #[display("mod")]
    Mod,
    #[display("macro")]
    Macro,
    #[display("field")]
    Field,
    #[display("variant")]
    Variant,
}

///
/// TypeShape
/// What a named type wraps, as far as enumeration is concerned.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeShape {
    Newtype(ValueKind),
    Unsupported(String),
}

///
/// Binding
/// One named declaration in the symbol table.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    pub name: String,
    pub kind: DeclKind,
    pub pos: Position,
    pub shape: Option<TypeShape>,
}

///
/// ConstScope
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConstScope {
    /// top-level `const`
    Module,
    /// inside an inherent `impl`
    Associated,
}

///
/// ConstDecl
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstDecl {
    pub name: String,
    /// Segments of the declared type when it is a plain path.
    pub ty: Vec<String>,
    pub scope: ConstScope,
    pub owner: Option<String>,
    pub pos: Position,
    /// `const` keyword for module constants, `impl` keyword for associated ones.
    pub group_start: Position,
    pub value: Option<ConstValue>,
}

///
/// SourceModel
///

#[derive(Debug, Default)]
pub struct SourceModel {
    files: Vec<SourceFile>,
    bindings: Vec<Binding>,
    consts: Vec<ConstDecl>,
}

impl SourceModel {
    /// Read and parse every file of the compilation unit.
    pub fn load<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Self, SourceError> {
        let sources = paths
            .into_iter()
            .map(|path| {
                let path = path.as_ref().to_path_buf();
                fs::read_to_string(&path)
                    .map(|text| (path.clone(), text))
                    .map_err(|source| SourceError::Io { path, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::parse(sources)
    }

    /// Build a model from in-memory `(path, text)` pairs.
    pub fn parse<P, S>(sources: impl IntoIterator<Item = (P, S)>) -> Result<Self, SourceError>
    where
        P: Into<PathBuf>,
        S: AsRef<str>,
    {
        let mut files = Vec::new();
        let mut asts = Vec::new();

        for (index, (path, text)) in sources.into_iter().enumerate() {
            let path = path.into();
            let text = text.as_ref();
            let ast = syn::parse_file(text).map_err(|err| SourceError::Parse {
                path: path.clone(),
                line: err.span().start().line,
                message: err.to_string(),
            })?;

            files.push(SourceFile::new(FileId(index), path, text));
            asts.push((ast, text.to_string()));
        }

        let mut collector = symbols::Collector::default();
        for (index, (ast, text)) in asts.iter().enumerate() {
            let id = FileId(index);
            let place = |lc: LineColumn| files[index].position(id, lc, text);
            collector.collect_file(ast, &place);
        }

        let mut evaluator = Evaluator::new(collector.newtypes);
        for (decl, expr) in &collector.consts {
            let key = ConstKey::new(decl.owner.as_deref(), decl.name.as_str());
            evaluator.register(key, &decl.ty, *expr);
        }

        let consts = collector
            .consts
            .iter()
            .map(|(decl, _)| {
                let mut decl = decl.clone();
                decl.value =
                    evaluator.value_of(&ConstKey::new(decl.owner.as_deref(), decl.name.as_str()));
                decl
            })
            .collect();

        let mut bindings = collector.bindings;
        bindings.sort_by_key(|b| (b.pos.file, b.pos.offset));

        tracing::debug!(
            files = files.len(),
            bindings = bindings.len(),
            "source model loaded"
        );

        Ok(Self {
            files,
            bindings,
            consts,
        })
    }

    /// Symbol table in source order (file load order, then byte offset).
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    #[must_use]
    pub fn consts(&self) -> &[ConstDecl] {
        &self.consts
    }

    #[must_use]
    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.0]
    }

    /// First named-type binding called `name`.
    #[must_use]
    pub fn type_decl(&self, name: &str) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|b| b.kind == DeclKind::Type && b.name == name)
    }

    /// Resolve `path` to a loaded file, by equality first, then by identity on disk.
    #[must_use]
    pub fn find_file(&self, path: &Path) -> Option<FileId> {
        if let Some(index) = self.files.iter().position(|f| f.path == path) {
            return Some(FileId(index));
        }

        let wanted = fs::canonicalize(path).ok()?;
        self.files
            .iter()
            .position(|f| fs::canonicalize(&f.path).is_ok_and(|p| p == wanted))
            .map(FileId)
    }

    /// Sort key ordering positions by `(file path, byte offset)`.
    #[must_use]
    pub fn order_key(&self, pos: Position) -> (&Path, usize) {
        (self.files[pos.file.0].path.as_path(), pos.offset)
    }

    /// `path:line:column` (column 1-based) for messages.
    #[must_use]
    pub fn describe(&self, pos: Position) -> String {
        format!(
            "{}:{}:{}",
            self.files[pos.file.0].path.display(),
            pos.line,
            pos.column + 1
        )
    }
}
