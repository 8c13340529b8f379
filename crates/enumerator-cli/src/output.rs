use anyhow::Context;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

pub const STDOUT: &str = "<STDOUT>";
pub const STDERR: &str = "<STDERR>";

///
/// Sink
/// Where rendered code goes.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Sink {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl Sink {
    /// `output` as given, else `file_name` in the input's directory.
    pub fn resolve(output: Option<&str>, input: &Path, file_name: &str) -> Self {
        match output {
            Some(STDOUT) => Self::Stdout,
            Some(STDERR) => Self::Stderr,
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::File(
                input
                    .parent()
                    .map_or_else(|| PathBuf::from(file_name), |dir| dir.join(file_name)),
            ),
        }
    }

    pub fn write(&self, code: &str) -> anyhow::Result<()> {
        match self {
            Self::Stdout => io::stdout()
                .lock()
                .write_all(code.as_bytes())
                .context("failed to write to stdout"),
            Self::Stderr => io::stderr()
                .lock()
                .write_all(code.as_bytes())
                .context("failed to write to stderr"),
            Self::File(path) => fs::write(path, code)
                .with_context(|| format!("failed to write {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_names_select_std_streams() {
        let input = Path::new("src/example.rs");

        assert_eq!(Sink::resolve(Some(STDOUT), input, "kind_enum.rs"), Sink::Stdout);
        assert_eq!(Sink::resolve(Some(STDERR), input, "kind_enum.rs"), Sink::Stderr);
    }

    #[test]
    fn default_lands_next_to_input() {
        assert_eq!(
            Sink::resolve(None, Path::new("src/example.rs"), "kind_enum.rs"),
            Sink::File(PathBuf::from("src/kind_enum.rs"))
        );
        assert_eq!(
            Sink::resolve(None, Path::new("example.rs"), "kind_enum.rs"),
            Sink::File(PathBuf::from("kind_enum.rs"))
        );
    }

    #[test]
    fn file_sink_writes_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.rs");

        Sink::File(path.clone()).write("// code\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "// code\n");
    }

    #[test]
    fn file_sink_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.rs");

        let err = Sink::File(path.clone()).write("x").unwrap_err();

        assert!(err.to_string().contains(&path.display().to_string()));
    }
}
