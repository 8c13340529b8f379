use clap::Parser;
use enumerator_build::{Config, NamingStrategy};
use std::path::PathBuf;

/// CLI arguments for the enumerator binary.
#[derive(Parser, Debug)]
#[command(
    name = "enumerator",
    version,
    about = "Generate enum-like impls for newtype constants"
)]
pub struct CliArgs {
    /// Source file declaring the type.
    #[arg(short = 'i', long, env = "ENUMERATOR_INPUT")]
    pub input: PathBuf,

    /// Other source files of the same crate to search for constants.
    #[arg(long = "with", value_name = "FILE")]
    pub with: Vec<PathBuf>,

    /// Output file, `<STDOUT>` or `<STDERR>`. Defaults to `<snake_type>_enum.rs`
    /// next to the input.
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Type to enumerate. Defaults to the first declaration at or after `--line`.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub type_name: Option<String>,

    /// Line to search from when no type is given.
    #[arg(short = 'l', long, env = "ENUMERATOR_LINE", hide = true, default_value_t = 0)]
    pub line: usize,

    /// Binding name used in generated match arms.
    #[arg(short = 'r', long)]
    pub receiver: Option<String>,

    /// none, camelCase, PascalCase, snake_case, UPPER_SNAKE_CASE or kebab-case.
    #[arg(short = 'n', long = "naming-strategy", default_value = "none")]
    pub naming: NamingStrategy,
}

impl CliArgs {
    pub fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            with: self.with.clone(),
            type_name: self.type_name.clone(),
            line: self.line,
            receiver: self.receiver.clone(),
            naming: self.naming,
        }
    }
}
