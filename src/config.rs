use crate::bench::SuiteOptions;
use crate::error::Result;
use crate::utils::constants::{DEFAULT_CONFIG_FILE, DEFAULT_ENCODING, ENV_PREFIX};
use crate::utils::filename::default_data_path;
use clap::ValueEnum;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[<ms>] <name>` per test
    #[default]
    Text,
    /// One JSON report after all tests
    Json,
}

/// Runtime settings, layered: defaults, then the TOML file, then
/// `WEATHER_BENCH_*` environment variables. CLI flags are applied last by
/// the command layer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Settings {
    pub data_path: PathBuf,

    #[validate(length(min = 1))]
    pub encoding: String,

    pub use_mmap: bool,

    #[validate(range(min = 0.001, max = 1000.0))]
    pub repeat_scale: f64,

    pub include_manual: bool,

    #[serde(default)]
    pub filter: Option<String>,

    pub format: OutputFormat,

    pub progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            encoding: DEFAULT_ENCODING.to_string(),
            use_mmap: false,
            repeat_scale: 1.0,
            include_manual: true,
            filter: None,
            format: OutputFormat::Text,
            progress: true,
        }
    }
}

impl Settings {
    /// Load settings. An explicit `config_path` must exist; otherwise
    /// `weather-bench.toml` in the working directory is used if present.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_fallback(config_path, Path::new(DEFAULT_CONFIG_FILE))
    }

    /// As [`Settings::load`], with `fallback` read (if it exists) when no
    /// explicit file is given.
    pub fn load_with_fallback(config_path: Option<&Path>, fallback: &Path) -> Result<Self> {
        let defaults = Self::default();

        let file = match config_path {
            Some(path) => File::from(path).required(true),
            None => File::from(fallback).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("data_path", defaults.data_path.to_string_lossy().to_string())?
            .set_default("encoding", defaults.encoding)?
            .set_default("use_mmap", defaults.use_mmap)?
            .set_default("repeat_scale", defaults.repeat_scale)?
            .set_default("include_manual", defaults.include_manual)?
            .set_default("format", "text")?
            .set_default("progress", defaults.progress)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn suite_options(&self) -> SuiteOptions {
        SuiteOptions {
            repeat_scale: self.repeat_scale,
            include_manual: self.include_manual,
            filter: self.filter.clone(),
        }
    }
}
