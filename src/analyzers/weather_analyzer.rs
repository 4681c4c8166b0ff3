use crate::error::{BenchError, Result};
use crate::models::WeatherPoint;
use crate::readers::LoadReport;
use chrono::NaiveDate;

#[derive(Debug)]
pub struct WeatherStatistics {
    pub total_records: usize,
    pub date_range: (NaiveDate, NaiveDate),
    pub temperature_stats: TemperatureStats,
    pub event_days: EventDays,
    pub mean_cloud_cover: f64,
    pub total_precipitation: f64,
}

#[derive(Debug)]
pub struct TemperatureStats {
    pub min_temp: i32,
    pub max_temp: i32,
    pub avg_temp: f64,
    pub min_temp_date: NaiveDate,
    pub max_temp_date: NaiveDate,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct EventDays {
    pub fog: usize,
    pub rain: usize,
    pub thunderstorm: usize,
    pub snow: usize,
    /// Days with no reported event
    pub clear: usize,
}

/// Row accounting for a load, shown alongside the statistics.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadQuality {
    pub data_rows: usize,
    pub parsed_rows: usize,
    pub incomplete_rows: usize,
    pub rejected_rows: usize,
}

impl LoadQuality {
    pub fn from_report(report: &LoadReport) -> Self {
        Self {
            data_rows: report.data_rows(),
            parsed_rows: report.points.len(),
            incomplete_rows: report.incomplete_rows,
            rejected_rows: report.rejected_rows,
        }
    }

    pub fn parsed_percentage(&self) -> f64 {
        if self.data_rows == 0 {
            return 0.0;
        }
        (self.parsed_rows as f64 / self.data_rows as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "Rows: {} data rows, {} parsed ({:.1}%), {} incomplete, {} rejected",
            self.data_rows,
            self.parsed_rows,
            self.parsed_percentage(),
            self.incomplete_rows,
            self.rejected_rows
        )
    }
}

pub struct WeatherAnalyzer;

impl WeatherAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_statistics(&self, points: &[WeatherPoint]) -> Result<WeatherStatistics> {
        let first = points
            .first()
            .ok_or_else(|| BenchError::EmptyDataset("No records to analyze".to_string()))?;

        let mut min_date = first.date;
        let mut max_date = first.date;
        let mut min_temp = first.temp_min;
        let mut min_temp_date = first.date;
        let mut max_temp = first.temp_max;
        let mut max_temp_date = first.date;
        let mut temp_sum = 0i64;
        let mut cloud_sum = 0i64;
        let mut precipitation = 0.0;
        let mut event_days = EventDays::default();

        for point in points {
            min_date = min_date.min(point.date);
            max_date = max_date.max(point.date);

            // First occurrence wins on ties
            if point.temp_min < min_temp {
                min_temp = point.temp_min;
                min_temp_date = point.date;
            }
            if point.temp_max > max_temp {
                max_temp = point.temp_max;
                max_temp_date = point.date;
            }

            temp_sum += point.temp_avg as i64;
            cloud_sum += point.cloud_cover as i64;
            precipitation += point.precipitation;

            if point.has_any_event() {
                let events = point.events();
                event_days.fog += events.fog as usize;
                event_days.rain += events.rain as usize;
                event_days.thunderstorm += events.thunderstorm as usize;
                event_days.snow += events.snow as usize;
            } else {
                event_days.clear += 1;
            }
        }

        let count = points.len() as f64;

        Ok(WeatherStatistics {
            total_records: points.len(),
            date_range: (min_date, max_date),
            temperature_stats: TemperatureStats {
                min_temp,
                max_temp,
                avg_temp: temp_sum as f64 / count,
                min_temp_date,
                max_temp_date,
            },
            event_days,
            mean_cloud_cover: cloud_sum as f64 / count,
            total_precipitation: precipitation,
        })
    }
}

impl WeatherStatistics {
    pub fn summary(&self) -> String {
        format!(
            "Date Range: {} to {} ({} years)\n\
            Records: {} total\n\
            Temperature Range: {}°F to {}°F",
            self.date_range.0,
            self.date_range.1,
            (self
                .date_range
                .1
                .signed_duration_since(self.date_range.0)
                .num_days()
                / 365),
            self.total_records,
            self.temperature_stats.min_temp,
            self.temperature_stats.max_temp,
        )
    }

    pub fn detailed_summary(&self) -> String {
        format!(
            "{}\n\n\
            Extreme Temperatures:\n\
            - Coldest: {}°F on {}\n\
            - Hottest: {}°F on {}\n\
            - Average: {:.1}°F\n\n\
            Event Days:\n\
            - Fog: {}\n\
            - Rain: {}\n\
            - Thunderstorm: {}\n\
            - Snow: {}\n\
            - None: {}\n\n\
            Mean Cloud Cover: {:.2}\n\
            Total Precipitation: {:.2} in",
            self.summary(),
            self.temperature_stats.min_temp,
            self.temperature_stats.min_temp_date,
            self.temperature_stats.max_temp,
            self.temperature_stats.max_temp_date,
            self.temperature_stats.avg_temp,
            self.event_days.fog,
            self.event_days.rain,
            self.event_days.thunderstorm,
            self.event_days.snow,
            self.event_days.clear,
            self.mean_cloud_cover,
            self.total_precipitation,
        )
    }
}

impl Default for WeatherAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
