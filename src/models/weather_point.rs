use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    EVENT_DELIMITER, EVENT_FOG, EVENT_RAIN, EVENT_SNOW, EVENT_THUNDERSTORM,
};

/// One calendar day's observation.
///
/// Temperatures and dew points are in °F, pressure in inches of mercury,
/// visibility in miles, wind in mph and precipitation in inches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherPoint {
    pub date: NaiveDate,

    pub temp_max: i32,
    pub temp_avg: i32,
    pub temp_min: i32,

    pub dew_max: i32,
    pub dew_avg: i32,
    pub dew_min: i32,

    pub humidity_max: i32,
    pub humidity_avg: i32,
    pub humidity_min: i32,

    pub pressure_max: f64,
    pub pressure_avg: f64,
    pub pressure_min: f64,

    pub visibility_max: i32,
    pub visibility_avg: i32,
    pub visibility_min: i32,

    pub windspeed_max: i32,
    pub windspeed_avg: i32,
    pub gustspeed_max: i32,

    pub precipitation: f64,
    pub cloud_cover: i32,

    pub fog: bool,
    pub rain: bool,
    pub thunderstorm: bool,
    pub snow: bool,

    pub wind_direction: i32,
}

impl WeatherPoint {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn events(&self) -> EventFlags {
        EventFlags {
            fog: self.fog,
            rain: self.rain,
            thunderstorm: self.thunderstorm,
            snow: self.snow,
        }
    }

    pub fn has_any_event(&self) -> bool {
        self.events() != EventFlags::default()
    }
}

/// Weather events reported for a day, parsed from the hyphen-joined
/// `Events` column (e.g. `Fog-Rain-Snow`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFlags {
    pub fog: bool,
    pub rain: bool,
    pub thunderstorm: bool,
    pub snow: bool,
}

impl EventFlags {
    /// Tokens must match exactly; anything unrecognised is ignored.
    pub fn parse(events: &str) -> Self {
        let mut flags = Self::default();
        for token in events.split(EVENT_DELIMITER) {
            match token {
                EVENT_FOG => flags.fog = true,
                EVENT_RAIN => flags.rain = true,
                EVENT_THUNDERSTORM => flags.thunderstorm = true,
                EVENT_SNOW => flags.snow = true,
                _ => {}
            }
        }
        flags
    }
}
