mod args;
mod output;
mod tracing_config;

use anyhow::Context;
use args::CliArgs;
use clap::Parser;
use output::Sink;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("enumerator: {err:#}");
            ExitCode::FAILURE
        }
    }
}

// nothing reaches the sink unless generation succeeded
fn run(args: &CliArgs) -> anyhow::Result<()> {
    let config = args.config();
    tracing::debug!(command = %config.command(), "invoked");

    let generated = enumerator_build::generate(&config)
        .with_context(|| format!("cannot generate from {}", config.input.display()))?;

    let sink = Sink::resolve(args.output.as_deref(), &config.input, &generated.file_name);
    sink.write(&generated.code)?;

    tracing::debug!(?sink, type_name = %generated.type_name, "written");

    Ok(())
}
