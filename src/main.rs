use anyhow::Context;
use clap::Parser;
use tracing::Level;
use weather_bench::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(cli).context("weather-bench failed")
}
