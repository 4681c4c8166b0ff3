use crate::analyzers::weather_queries::{self as queries, manual};
use crate::bench::named_test::NamedTest;
use crate::error::Result;
use crate::models::WeatherPoint;
use crate::utils::constants::{
    CLOUD_WINDOW_END_YEAR, CLOUD_WINDOW_START_YEAR, COLDEST_RAINY_DAYS, HOT_DAY_THRESHOLD_F,
    MANUAL_SUFFIX,
};

pub const TEST_WHERE: &str = "where";
pub const TEST_SELECT: &str = "select";
pub const TEST_WHERE_AVERAGE: &str = "where().average()";
pub const TEST_MAX: &str = "max";
pub const TEST_MIN: &str = "min";
pub const TEST_WHERE_SELECT: &str = "where().select()";
pub const TEST_WHERE_ORDERBY_TAKE_SELECT: &str = "where().orderby().take().select()";

/// Which stock tests to build and how hard to drive them.
#[derive(Debug, Clone)]
pub struct SuiteOptions {
    /// Multiplier on each test's repeat count; results round and floor at 1
    pub repeat_scale: f64,
    /// Also register the hand-written loop variant of each query
    pub include_manual: bool,
    /// Keep only tests whose name contains this substring
    pub filter: Option<String>,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            repeat_scale: 1.0,
            include_manual: true,
            filter: None,
        }
    }
}

impl SuiteOptions {
    pub fn scaled(&self, repeat_count: u32) -> u32 {
        let scaled = (repeat_count as f64 * self.repeat_scale).round();
        scaled.clamp(1.0, u32::MAX as f64) as u32
    }

    pub fn selects(&self, name: &str) -> bool {
        self.filter
            .as_deref()
            .map_or(true, |filter| name.contains(filter))
    }
}

struct SuiteBuilder<'a, 'o> {
    options: &'o SuiteOptions,
    tests: Vec<NamedTest<'a>>,
}

impl<'a> SuiteBuilder<'a, '_> {
    fn add<F, T>(&mut self, name: &str, repeat_count: u32, operation: F) -> Result<()>
    where
        F: Fn() -> T + 'a,
    {
        if self.options.selects(name) {
            let test = NamedTest::new(name, self.options.scaled(repeat_count), operation)?;
            self.tests.push(test);
        }
        Ok(())
    }

    fn add_manual<F, T>(&mut self, name: &str, repeat_count: u32, operation: F) -> Result<()>
    where
        F: Fn() -> T + 'a,
    {
        if !self.options.include_manual {
            return Ok(());
        }
        self.add(&format!("{}{}", name, MANUAL_SUFFIX), repeat_count, operation)
    }
}

/// Build the stock workload list over `points`, in run order.
pub fn build_suite<'a>(points: &'a [WeatherPoint], options: &SuiteOptions) -> Result<Vec<NamedTest<'a>>> {
    let mut suite = SuiteBuilder {
        options,
        tests: Vec::new(),
    };

    suite.add(TEST_WHERE, 2000, move || queries::hot_days(points, HOT_DAY_THRESHOLD_F))?;
    suite.add_manual(TEST_WHERE, 2000, move || manual::hot_days(points, HOT_DAY_THRESHOLD_F))?;

    suite.add(TEST_SELECT, 2000, move || queries::cloud_covers(points))?;
    suite.add_manual(TEST_SELECT, 2000, move || manual::cloud_covers(points))?;

    suite.add(TEST_WHERE_AVERAGE, 500, move || {
        queries::average_cloud_cover_between(points, CLOUD_WINDOW_START_YEAR, CLOUD_WINDOW_END_YEAR)
    })?;
    suite.add_manual(TEST_WHERE_AVERAGE, 500, move || {
        manual::average_cloud_cover_between(points, CLOUD_WINDOW_START_YEAR, CLOUD_WINDOW_END_YEAR)
    })?;

    suite.add(TEST_MAX, 1300, move || queries::max_temp_max(points))?;
    suite.add_manual(TEST_MAX, 1300, move || manual::max_temp_max(points))?;

    suite.add(TEST_MIN, 1300, move || queries::min_temp_min(points))?;
    suite.add_manual(TEST_MIN, 1300, move || manual::min_temp_min(points))?;

    suite.add(TEST_WHERE_SELECT, 2000, move || queries::snow_day_min_temps(points))?;
    suite.add_manual(TEST_WHERE_SELECT, 2000, move || manual::snow_day_min_temps(points))?;

    suite.add(TEST_WHERE_ORDERBY_TAKE_SELECT, 100, move || {
        queries::coldest_rainy_days(points, COLDEST_RAINY_DAYS)
    })?;
    suite.add_manual(TEST_WHERE_ORDERBY_TAKE_SELECT, 100, move || {
        manual::coldest_rainy_days(points, COLDEST_RAINY_DAYS)
    })?;

    Ok(suite.tests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(tests: &[NamedTest<'_>]) -> Vec<String> {
        tests.iter().map(|t| t.name().to_string()).collect()
    }

    #[test]
    fn test_default_suite_order_and_repeats() {
        let points = vec![WeatherPoint::default(); 4];
        let tests = build_suite(&points, &SuiteOptions::default()).unwrap();

        assert_eq!(tests.len(), 14);
        assert_eq!(tests[0].name(), "where");
        assert_eq!(tests[1].name(), "where - manual");
        assert_eq!(tests[13].name(), "where().orderby().take().select() - manual");

        let repeats: Vec<u32> = tests.iter().step_by(2).map(|t| t.repeat_count()).collect();
        assert_eq!(repeats, vec![2000, 2000, 500, 1300, 1300, 2000, 100]);
    }

    #[test]
    fn test_without_manual_variants() {
        let points = vec![WeatherPoint::default(); 4];
        let options = SuiteOptions {
            include_manual: false,
            ..Default::default()
        };
        let tests = build_suite(&points, &options).unwrap();

        assert_eq!(
            names(&tests),
            vec![
                "where",
                "select",
                "where().average()",
                "max",
                "min",
                "where().select()",
                "where().orderby().take().select()",
            ]
        );
    }

    #[test]
    fn test_filter_and_scale() {
        let points = vec![WeatherPoint::default(); 4];
        let options = SuiteOptions {
            repeat_scale: 0.01,
            include_manual: true,
            filter: Some("orderby".to_string()),
        };
        let tests = build_suite(&points, &options).unwrap();

        assert_eq!(tests.len(), 2);
        assert!(tests.iter().all(|t| t.repeat_count() == 1));
    }

    #[test]
    fn test_scaled_never_reaches_zero() {
        let options = SuiteOptions {
            repeat_scale: 0.0001,
            ..Default::default()
        };
        assert_eq!(options.scaled(100), 1);

        let options = SuiteOptions {
            repeat_scale: 2.5,
            ..Default::default()
        };
        assert_eq!(options.scaled(100), 250);
    }

    #[test]
    fn test_suite_runs_on_empty_dataset() {
        let points: Vec<WeatherPoint> = Vec::new();
        let tests = build_suite(&points, &SuiteOptions::default()).unwrap();
        for test in &tests {
            test.invoke();
        }
    }
}
