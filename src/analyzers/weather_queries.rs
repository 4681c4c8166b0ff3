//! Stock query workloads over a loaded dataset.
//!
//! Each query exists twice: as an iterator chain (top level) and as a
//! hand-written loop in [`manual`]. Both return the same answer so their
//! timings are directly comparable.

use crate::models::WeatherPoint;

/// Days whose maximum temperature exceeded `threshold` °F
pub fn hot_days(points: &[WeatherPoint], threshold: i32) -> Vec<&WeatherPoint> {
    points.iter().filter(|p| p.temp_max > threshold).collect()
}

pub fn cloud_covers(points: &[WeatherPoint]) -> Vec<i32> {
    points.iter().map(|p| p.cloud_cover).collect()
}

/// Mean cloud cover for days strictly between the two years.
/// `None` when no day falls in the window.
pub fn average_cloud_cover_between(
    points: &[WeatherPoint],
    after_year: i32,
    before_year: i32,
) -> Option<f64> {
    let (sum, count) = points
        .iter()
        .filter(|p| after_year < p.year() && p.year() < before_year)
        .fold((0i64, 0usize), |(sum, count), p| {
            (sum + p.cloud_cover as i64, count + 1)
        });

    (count > 0).then(|| sum as f64 / count as f64)
}

pub fn max_temp_max(points: &[WeatherPoint]) -> Option<i32> {
    points.iter().map(|p| p.temp_max).max()
}

pub fn min_temp_min(points: &[WeatherPoint]) -> Option<i32> {
    points.iter().map(|p| p.temp_min).min()
}

pub fn snow_day_min_temps(points: &[WeatherPoint]) -> Vec<i32> {
    points.iter().filter(|p| p.snow).map(|p| p.temp_min).collect()
}

/// Minimum temperatures of the `count` coldest rainy days, coldest first.
/// Ties keep file order.
pub fn coldest_rainy_days(points: &[WeatherPoint], count: usize) -> Vec<i32> {
    let mut rainy: Vec<&WeatherPoint> = points.iter().filter(|p| p.rain).collect();
    rainy.sort_by_key(|p| p.temp_min);
    rainy.into_iter().take(count).map(|p| p.temp_min).collect()
}

pub mod manual {
    use crate::models::WeatherPoint;

    pub fn hot_days(points: &[WeatherPoint], threshold: i32) -> Vec<&WeatherPoint> {
        let mut result = Vec::new();
        for point in points {
            if point.temp_max > threshold {
                result.push(point);
            }
        }
        result
    }

    pub fn cloud_covers(points: &[WeatherPoint]) -> Vec<i32> {
        let mut result = Vec::new();
        for point in points {
            result.push(point.cloud_cover);
        }
        result
    }

    pub fn average_cloud_cover_between(
        points: &[WeatherPoint],
        after_year: i32,
        before_year: i32,
    ) -> Option<f64> {
        let mut in_window = Vec::new();
        for point in points {
            let year = point.year();
            if after_year < year && year < before_year {
                in_window.push(point);
            }
        }

        if in_window.is_empty() {
            return None;
        }

        let mut sum = 0.0;
        for point in &in_window {
            sum += point.cloud_cover as f64;
        }
        Some(sum / in_window.len() as f64)
    }

    pub fn max_temp_max(points: &[WeatherPoint]) -> Option<i32> {
        let mut max: Option<i32> = None;
        for point in points {
            if max.map_or(true, |m| point.temp_max > m) {
                max = Some(point.temp_max);
            }
        }
        max
    }

    pub fn min_temp_min(points: &[WeatherPoint]) -> Option<i32> {
        let mut min: Option<i32> = None;
        for point in points {
            if min.map_or(true, |m| point.temp_min < m) {
                min = Some(point.temp_min);
            }
        }
        min
    }

    pub fn snow_day_min_temps(points: &[WeatherPoint]) -> Vec<i32> {
        let mut snowy = Vec::new();
        for point in points {
            if point.snow {
                snowy.push(point);
            }
        }

        let mut temps = Vec::with_capacity(snowy.len());
        for point in snowy {
            temps.push(point.temp_min);
        }
        temps
    }

    pub fn coldest_rainy_days(points: &[WeatherPoint], count: usize) -> Vec<i32> {
        let mut rainy = Vec::new();
        for point in points {
            if point.rain {
                rainy.push(point);
            }
        }

        rainy.sort_by(|a, b| a.temp_min.cmp(&b.temp_min));

        let mut temps = Vec::with_capacity(count);
        for point in rainy.iter().take(count) {
            temps.push(point.temp_min);
        }
        temps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn point(y: i32, m: u32, d: u32, temp_max: i32, temp_min: i32, cloud: i32) -> WeatherPoint {
        WeatherPoint {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            temp_max,
            temp_min,
            cloud_cover: cloud,
            ..Default::default()
        }
    }

    fn sample() -> Vec<WeatherPoint> {
        vec![
            WeatherPoint {
                rain: true,
                ..point(1979, 6, 1, 95, 70, 2)
            },
            WeatherPoint {
                snow: true,
                rain: true,
                ..point(1981, 1, 10, 30, 12, 8)
            },
            WeatherPoint {
                rain: true,
                ..point(1990, 4, 2, 60, 45, 5)
            },
            WeatherPoint {
                snow: true,
                ..point(1999, 12, 30, 28, 9, 6)
            },
            point(2000, 7, 4, 91, 74, 0),
            WeatherPoint {
                rain: true,
                ..point(2005, 2, 2, 40, 12, 7)
            },
        ]
    }

    #[test]
    fn test_hot_days() {
        let points = sample();
        let hot = hot_days(&points, 90);
        assert_eq!(hot.len(), 2);
        assert_eq!(hot[0].year(), 1979);
        assert_eq!(hot[1].year(), 2000);
        assert_eq!(manual::hot_days(&points, 90), hot);
    }

    #[test]
    fn test_cloud_covers() {
        let points = sample();
        assert_eq!(cloud_covers(&points), vec![2, 8, 5, 6, 0, 7]);
        assert_eq!(manual::cloud_covers(&points), cloud_covers(&points));
    }

    #[test]
    fn test_average_cloud_cover_window_is_exclusive() {
        let points = sample();
        // 1981, 1990 and 1999 only
        let avg = average_cloud_cover_between(&points, 1980, 2000).unwrap();
        assert!((avg - 19.0 / 3.0).abs() < 1e-12);

        let manual_avg = manual::average_cloud_cover_between(&points, 1980, 2000).unwrap();
        assert!((avg - manual_avg).abs() < 1e-12);

        assert_eq!(average_cloud_cover_between(&points, 2010, 2020), None);
        assert_eq!(manual::average_cloud_cover_between(&points, 2010, 2020), None);
    }

    #[test]
    fn test_extremes() {
        let points = sample();
        assert_eq!(max_temp_max(&points), Some(95));
        assert_eq!(min_temp_min(&points), Some(9));
        assert_eq!(manual::max_temp_max(&points), Some(95));
        assert_eq!(manual::min_temp_min(&points), Some(9));

        assert_eq!(max_temp_max(&[]), None);
        assert_eq!(manual::min_temp_min(&[]), None);
    }

    #[test]
    fn test_snow_day_min_temps() {
        let points = sample();
        assert_eq!(snow_day_min_temps(&points), vec![12, 9]);
        assert_eq!(manual::snow_day_min_temps(&points), vec![12, 9]);
    }

    #[test]
    fn test_coldest_rainy_days() {
        let points = sample();
        assert_eq!(coldest_rainy_days(&points, 3), vec![12, 12, 45]);
        assert_eq!(manual::coldest_rainy_days(&points, 3), vec![12, 12, 45]);

        // Fewer rainy days than requested
        assert_eq!(coldest_rainy_days(&points, 10), vec![12, 12, 45, 70]);
        assert_eq!(manual::coldest_rainy_days(&points, 10).len(), 4);
    }
}
