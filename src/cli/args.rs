use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weather-bench")]
#[command(about = "Time in-memory queries over a daily weather CSV")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        help = "Settings file [default: weather-bench.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dataset and run the benchmark suite (the default)
    Run(RunArgs),

    /// Load the dataset and print a summary without benchmarking
    Inspect {
        #[arg(short, long, help = "Input weather CSV file")]
        data: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
pub struct RunArgs {
    #[arg(short, long, help = "Input weather CSV file")]
    pub data: Option<PathBuf>,

    #[arg(short, long, help = "Only run tests whose name contains this text")]
    pub filter: Option<String>,

    #[arg(short, long, help = "Multiply every repeat count by this factor")]
    pub scale: Option<f64>,

    #[arg(long, help = "Skip the hand-written loop variants")]
    pub no_manual: bool,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(
        long,
        num_args = 0..=1,
        help = "Write a JSON report [default: output/weather-bench-{YYMMDD}.json]"
    )]
    pub save_report: Option<Option<PathBuf>>,

    #[arg(long, help = "Memory-map the input file")]
    pub mmap: bool,

    #[arg(long, help = "Hide progress output")]
    pub quiet: bool,
}
