pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::{default_data_path, generate_default_report_filename};
pub use progress::ProgressReporter;
