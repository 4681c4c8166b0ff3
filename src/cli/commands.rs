use crate::analyzers::{LoadQuality, WeatherAnalyzer};
use crate::bench::{build_suite, BenchReport, BenchmarkHarness};
use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{OutputFormat, Settings};
use crate::error::Result;
use crate::readers::{LoadReport, WeatherReader};
use crate::utils::filename::generate_default_report_filename;
use crate::utils::progress::ProgressReporter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use validator::Validate;

pub fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            let save_report = args.apply(&mut settings);
            run_benchmarks(&settings, save_report.as_deref(), &mut out)?;
        }

        Commands::Inspect { data } => {
            if let Some(path) = data {
                settings.data_path = path;
            }
            inspect_dataset(&settings, &mut out)?;
        }
    }

    Ok(())
}

impl RunArgs {
    /// Fold command-line overrides into `settings`; returns where to save
    /// the JSON report, if requested.
    pub fn apply(self, settings: &mut Settings) -> Option<PathBuf> {
        if let Some(path) = self.data {
            settings.data_path = path;
        }
        if let Some(filter) = self.filter {
            settings.filter = Some(filter);
        }
        if let Some(scale) = self.scale {
            settings.repeat_scale = scale;
        }
        if self.no_manual {
            settings.include_manual = false;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if self.mmap {
            settings.use_mmap = true;
        }
        if self.quiet {
            settings.progress = false;
        }

        self.save_report
            .map(|path| path.unwrap_or_else(generate_default_report_filename))
    }
}

/// Load the dataset named by `settings`, writing row diagnostics to `out`.
/// Diagnostics are collected during the load and written once the spinner
/// is out of the way.
pub fn load_dataset<W: Write>(settings: &Settings, out: &mut W) -> Result<LoadReport> {
    let reader = WeatherReader::new()
        .with_mmap(settings.use_mmap)
        .with_encoding(&settings.encoding)?;

    let spinner = ProgressReporter::new_spinner("Loading weather data...", !settings.progress);
    let mut diagnostics = Vec::new();
    let report = reader.read_weather(&settings.data_path, &mut diagnostics)?;

    if !diagnostics.is_empty() {
        spinner.suspend(|| out.write_all(&diagnostics))?;
    }
    spinner.finish_with_message(&format!("Loaded {} records", report.points.len()));

    Ok(report)
}

/// Load the dataset, then time every selected stock test against it.
///
/// In JSON mode `out` receives only the report; row diagnostics go to stderr.
pub fn run_benchmarks<W: Write>(
    settings: &Settings,
    save_report: Option<&Path>,
    out: &mut W,
) -> Result<BenchReport> {
    settings.validate()?;

    let points = match settings.format {
        OutputFormat::Text => load_dataset(settings, out)?.points,
        OutputFormat::Json => load_dataset(settings, &mut io::stderr().lock())?.points,
    };
    let tests = build_suite(&points, &settings.suite_options())?;
    info!(tests = tests.len(), points = points.len(), "running benchmarks");

    let progress = ProgressReporter::new(tests.len() as u64, "Running benchmarks", !settings.progress);
    let harness = BenchmarkHarness::new().with_progress(&progress);

    let mut report = match settings.format {
        OutputFormat::Text => harness.run_all(&tests, out)?,
        OutputFormat::Json => harness.run_all(&tests, &mut io::sink())?,
    };
    report.dataset_points = points.len();
    progress.finish_with_message(&report.summary());

    if settings.format == OutputFormat::Json {
        writeln!(out, "{}", report.to_json()?)?;
    }

    if let Some(path) = save_report {
        report.save(path)?;
        info!(path = %path.display(), "report saved");
    }

    Ok(report)
}

/// Load the dataset and print row accounting plus summary statistics.
pub fn inspect_dataset<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    let report = load_dataset(settings, out)?;

    writeln!(out, "Dataset: {}", settings.data_path.display())?;
    writeln!(out, "{}", LoadQuality::from_report(&report).summary())?;

    if report.points.is_empty() {
        writeln!(out, "No records loaded")?;
        return Ok(());
    }

    let stats = WeatherAnalyzer::new().calculate_statistics(&report.points)?;
    writeln!(out, "\n{}", stats.detailed_summary())?;

    Ok(())
}
