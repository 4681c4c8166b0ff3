pub mod analyzers;
pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod readers;
pub mod utils;

pub use error::{BenchError, Result};
