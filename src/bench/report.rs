use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Timing of one test run across all of its repetitions.
#[derive(Debug, Clone, Serialize)]
pub struct TestTiming {
    pub name: String,
    pub repeat_count: u32,
    pub elapsed_ms: u64,
    pub per_iteration_us: f64,
}

impl TestTiming {
    pub fn new(name: &str, repeat_count: u32, elapsed: Duration) -> Self {
        Self {
            name: name.to_string(),
            repeat_count,
            elapsed_ms: elapsed.as_millis() as u64,
            per_iteration_us: elapsed.as_secs_f64() * 1_000_000.0 / repeat_count.max(1) as f64,
        }
    }

    /// `[<elapsed_ms>] <name>`
    pub fn line(&self) -> String {
        format!("[{}] {}", self.elapsed_ms, self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchReport {
    pub dataset_points: usize,
    pub timings: Vec<TestTiming>,
}

impl BenchReport {
    pub fn total_elapsed_ms(&self) -> u64 {
        self.timings.iter().map(|t| t.elapsed_ms).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn summary(&self) -> String {
        format!(
            "{} tests over {} points, {} ms total",
            self.timings.len(),
            self.dataset_points,
            self.total_elapsed_ms()
        )
    }
}
