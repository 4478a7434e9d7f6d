//! iris compiler front end entry point

use clap::Parser;
use iris::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    // Structured logging to stderr: `-v` wins over RUST_LOG, which wins over the `warn` default
    let filter = match cli.log_directive() {
        Some(directive) => tracing_subscriber::EnvFilter::new(directive),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    cli::run(cli);
}
