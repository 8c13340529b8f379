use crate::{ThisError, naming::NamingStrategy};
use std::path::{Path, PathBuf};

///
/// ConfigError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("receiver {0:?} is not a valid identifier")]
    InvalidReceiver(String),

    #[error(
        "unknown naming strategy {0:?} (expected none, camelCase, PascalCase, snake_case, UPPER_SNAKE_CASE or kebab-case)"
    )]
    UnknownNamingStrategy(String),
}

///
/// Config
///
/// Everything one invocation needs. When `type_name` is unset the target
/// is the closest declaration at or after `line` in `input` (0 reads from
/// the start of the file).
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub with: Vec<PathBuf>,
    pub type_name: Option<String>,
    pub line: usize,
    pub receiver: Option<String>,
    pub naming: NamingStrategy,
}

impl Config {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    #[must_use]
    pub const fn naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }

    /// Add another file of the same compilation unit.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.with.push(path.into());
        self
    }

    /// `input` first, then `with` in the order given.
    pub fn sources(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.input.as_path()).chain(self.with.iter().map(PathBuf::as_path))
    }

    /// Command line reproducing this invocation, for the provenance header.
    #[must_use]
    pub fn command(&self) -> String {
        let mut cmd = format!("enumerator --input={:?}", self.input.display().to_string());

        for path in &self.with {
            cmd.push_str(&format!(" --with={:?}", path.display().to_string()));
        }
        if let Some(name) = &self.type_name {
            cmd.push_str(&format!(" --type={name:?}"));
        }
        if self.line > 0 {
            cmd.push_str(&format!(" --line={}", self.line));
        }
        if self.naming != NamingStrategy::Identity {
            cmd.push_str(&format!(" --naming-strategy={}", self.naming));
        }
        if let Some(receiver) = &self.receiver {
            cmd.push_str(&format!(" --receiver={receiver}"));
        }

        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_lists_only_supplied_parameters() {
        let config = Config::new("src/example.rs");

        assert_eq!(config.command(), r#"enumerator --input="src/example.rs""#);
    }

    #[test]
    fn command_reproduces_every_parameter() {
        let config = Config::new("src/example.rs")
            .with_source("src/more.rs")
            .type_name("Kind")
            .line(12)
            .naming(NamingStrategy::Kebab)
            .receiver("k");

        assert_eq!(
            config.command(),
            r#"enumerator --input="src/example.rs" --with="src/more.rs" --type="Kind" --line=12 --naming-strategy=kebab-case --receiver=k"#
        );
    }

    #[test]
    fn sources_start_with_input() {
        let config = Config::new("a.rs").with_source("b.rs").with_source("c.rs");
        let sources: Vec<&Path> = config.sources().collect();

        assert_eq!(sources, vec![Path::new("a.rs"), Path::new("b.rs"), Path::new("c.rs")]);
    }
}
