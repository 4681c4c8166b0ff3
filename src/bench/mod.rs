pub mod harness;
pub mod named_test;
pub mod report;
pub mod suite;

pub use harness::BenchmarkHarness;
pub use named_test::NamedTest;
pub use report::{BenchReport, TestTiming};
pub use suite::{build_suite, SuiteOptions};
