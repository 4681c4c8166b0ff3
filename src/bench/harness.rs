use crate::bench::named_test::NamedTest;
use crate::bench::report::{BenchReport, TestTiming};
use crate::error::Result;
use crate::utils::progress::ProgressReporter;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

/// Runs named tests one at a time and prints `[<elapsed_ms>] <name>` for each.
pub struct BenchmarkHarness<'p> {
    progress: Option<&'p ProgressReporter>,
}

impl<'p> BenchmarkHarness<'p> {
    pub fn new() -> Self {
        Self { progress: None }
    }

    pub fn with_progress(mut self, progress: &'p ProgressReporter) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Time `repeat_count` back-to-back invocations of the test's operation.
    pub fn run<W: Write>(&self, test: &NamedTest<'_>, out: &mut W) -> Result<TestTiming> {
        if let Some(p) = self.progress {
            p.set_message(test.name());
        }

        let start = Instant::now();
        for _ in 0..test.repeat_count() {
            test.invoke();
        }
        let timing = TestTiming::new(test.name(), test.repeat_count(), start.elapsed());

        debug!(
            test = test.name(),
            repeats = timing.repeat_count,
            elapsed_ms = timing.elapsed_ms,
            "test finished"
        );

        match self.progress {
            Some(p) => p.suspend(|| writeln!(out, "{}", timing.line()))?,
            None => writeln!(out, "{}", timing.line())?,
        }

        Ok(timing)
    }

    /// Run every test in order. The list is owned by the caller.
    pub fn run_all<W: Write>(&self, tests: &[NamedTest<'_>], out: &mut W) -> Result<BenchReport> {
        let mut report = BenchReport::default();

        for test in tests {
            report.timings.push(self.run(test, out)?);
            if let Some(p) = self.progress {
                p.increment(1);
            }
        }

        Ok(report)
    }
}

impl Default for BenchmarkHarness<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_run_invokes_operation_repeat_count_times() {
        let calls = Cell::new(0u32);
        let test = NamedTest::new("five times", 5, || calls.set(calls.get() + 1)).unwrap();

        let mut out = Vec::new();
        let timing = BenchmarkHarness::new().run(&test, &mut out).unwrap();

        assert_eq!(calls.get(), 5);
        assert_eq!(timing.repeat_count, 5);

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] five times"));
    }

    #[test]
    fn test_run_all_preserves_registration_order() {
        let order = std::cell::RefCell::new(Vec::new());
        let tests = vec![
            NamedTest::new("first", 2, || order.borrow_mut().push("first")).unwrap(),
            NamedTest::new("second", 1, || order.borrow_mut().push("second")).unwrap(),
            NamedTest::new("third", 3, || order.borrow_mut().push("third")).unwrap(),
        ];

        let mut out = Vec::new();
        let progress = ProgressReporter::silent();
        let report = BenchmarkHarness::new()
            .with_progress(&progress)
            .run_all(&tests, &mut out)
            .unwrap();

        assert_eq!(
            *order.borrow(),
            vec!["first", "first", "second", "third", "third", "third"]
        );

        let names: Vec<&str> = report.timings.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.lines().nth(1).unwrap().ends_with("] second"));
    }

    #[test]
    fn test_run_all_with_no_tests() {
        let mut out = Vec::new();
        let report = BenchmarkHarness::new().run_all(&[], &mut out).unwrap();
        assert!(report.timings.is_empty());
        assert!(out.is_empty());
    }
}
