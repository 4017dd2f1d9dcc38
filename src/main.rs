use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod locate;
mod output;
mod parser;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show debug logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("prlint=debug")
    } else {
        EnvFilter::new("prlint=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli::run::execute(cli)
}
