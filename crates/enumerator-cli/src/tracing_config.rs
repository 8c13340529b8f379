//! Tracing setup for the CLI.
//!
//! The subscriber is only initialised when `ENUMERATOR_LOG` (or `RUST_LOG`)
//! is set. Output goes to stderr so `--output '<STDOUT>'` stays clean.

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `ENUMERATOR_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("ENUMERATOR_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
pub fn init_tracing() {
    let has_own_log = std::env::var("ENUMERATOR_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
