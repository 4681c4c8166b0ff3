use chrono::{Datelike, Local};
use std::path::PathBuf;

use super::constants::{DATA_DIR, DEFAULT_DATA_FILE};

/// Default dataset path: data/weather_kjfk_1948-2014.csv
pub fn default_data_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(DEFAULT_DATA_FILE)
}

/// Generate default report filename with format: weather-bench-{YYMMDD}.json
pub fn generate_default_report_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("weather-bench-{:02}{:02}{:02}.json", year, month, day);
    PathBuf::from("output").join(filename)
}
