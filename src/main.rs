use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use claude_daylog::cli::{Cli, run};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    // try_init so a subscriber installed elsewhere (tests) does not panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    run(&cli)
}
