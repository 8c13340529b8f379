//! ## Crate layout
//! - `source`: parsed files, symbol table, exact constant values, comments.
//! - `locate`: target type lookup by name or by position.
//! - `discover`: constants declared with the target type.
//! - `naming`: override comments and naming strategies.
//! - `validate`: uniqueness invariants, producing an `EnumSpec`.
//! - `ident`: binding names used inside generated code.
//! - `codegen`: token generation for every capability.
//!
//! `generate` runs the whole pipeline for one type; `Generator` and the
//! `build!` macro drive it from build scripts.

pub mod codegen;
pub mod config;
pub mod discover;
pub mod ident;
pub mod locate;
pub mod naming;
pub mod node;
pub mod source;
pub mod validate;

mod macros;

pub use codegen::EmitError;
pub use config::{Config, ConfigError};
pub use discover::ConsistencyError;
pub use locate::ResolutionError;
pub use naming::NamingStrategy;
pub use source::{SourceError, SourceModel};
pub use validate::ValidationError;

use codegen::EnumBuilder;
use ident::Idents;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

///
/// Generated
/// Rendered output for one type, header included.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Generated {
    pub type_name: String,
    pub file_name: String,
    pub code: String,
}

/// Load the configured sources and generate code for one type.
pub fn generate(config: &Config) -> Result<Generated, Error> {
    let model = SourceModel::load(config.sources())?;

    generate_with(&model, config)
}

/// Generate code for one type from an already loaded model.
///
/// Nothing is rendered unless every stage succeeds.
pub fn generate_with(model: &SourceModel, config: &Config) -> Result<Generated, Error> {
    let target = match &config.type_name {
        Some(name) => locate::by_name(model, name)?,
        None => locate::by_position(model, &config.input, config.line)?,
    };

    let bindings = discover::discover(model, &target)?;
    if bindings.is_empty() {
        return Err(EmitError::NoConstants(target.name).into());
    }
    let kind = bindings[0].value.kind();

    let named = bindings
        .into_iter()
        .map(|binding| {
            let comments = &model.file(binding.pos.file).comments;
            naming::resolve(binding, comments, config.naming)
        })
        .collect();

    let spec = validate::validate(target, kind, named)?;
    let idents = Idents::choose(spec.target(), spec.members(), config.receiver.as_deref())?;
    let tokens = EnumBuilder::new(&spec, &idents).generate();

    tracing::info!(
        type_name = %spec.target().name,
        members = spec.members().len(),
        naming = %config.naming,
        "generated"
    );

    Ok(Generated {
        type_name: spec.target().name.clone(),
        file_name: spec.target().file_name(),
        code: codegen::render(&tokens, &config.command()),
    })
}

///
/// Generator
///
/// Build-script driver: loads the sources once, then writes one file per
/// requested type.
///

#[derive(Clone, Debug)]
pub struct Generator {
    base: Config,
    targets: Vec<Config>,
}

impl Generator {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            base: Config::new(input),
            targets: Vec::new(),
        }
    }

    /// Add another file of the same compilation unit.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.base = self.base.with_source(path);
        self
    }

    /// Request a type, displayed with the identity strategy.
    #[must_use]
    pub fn target(self, type_name: &str) -> Self {
        self.target_with(type_name, NamingStrategy::Identity, None)
    }

    /// Request a type with its own naming strategy and receiver.
    #[must_use]
    pub fn target_with(
        mut self,
        type_name: &str,
        naming: NamingStrategy,
        receiver: Option<&str>,
    ) -> Self {
        let mut config = self.base.clone().type_name(type_name).naming(naming);
        config.receiver = receiver.map(str::to_string);

        self.targets.push(config);
        self
    }

    /// Generate every requested type into `dir`, returning the written paths.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let model = SourceModel::load(self.base.sources())?;
        let mut written = Vec::with_capacity(self.targets.len());

        for target in &self.targets {
            let mut config = target.clone();
            config.with.clone_from(&self.base.with);

            let generated = generate_with(&model, &config)?;
            let path = dir.join(&generated.file_name);

            fs::write(&path, generated.code).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            written.push(path);
        }

        Ok(written)
    }

    /// `cargo:rerun-if-changed` lines for every source file.
    #[must_use]
    pub fn rerun_if_changed(&self) -> Vec<String> {
        self.base
            .sources()
            .map(|path| format!("cargo:rerun-if-changed={}", path.display()))
            .collect()
    }
}
