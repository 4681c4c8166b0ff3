pub mod args;
pub mod commands;

pub use args::{Cli, Commands, RunArgs};
pub use commands::{inspect_dataset, load_dataset, run, run_benchmarks};
