/// Default dataset location, relative to the working directory
pub const DATA_DIR: &str = "data";
pub const DEFAULT_DATA_FILE: &str = "weather_kjfk_1948-2014.csv";

/// Configuration file and environment prefix
pub const DEFAULT_CONFIG_FILE: &str = "weather-bench.toml";
pub const ENV_PREFIX: &str = "WEATHER_BENCH";

/// Row shape
pub const MIN_FIELDS_PER_ROW: usize = 23;
pub const FIELD_DELIMITER: u8 = b',';
pub const EVENT_DELIMITER: char = '-';

/// Placeholder normalization
pub const TRACE_MARKER: &str = "T";
pub const PLACEHOLDER_VALUE: &str = "0";

/// Date column format; month and day may be one or two digits
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column headers as published by the upstream provider. The dew point
/// spellings are inconsistent upstream and must be matched verbatim.
pub const COL_DATE: &str = "EST";
pub const COL_TEMP_MAX: &str = "Max TemperatureF";
pub const COL_TEMP_AVG: &str = "Mean TemperatureF";
pub const COL_TEMP_MIN: &str = "Min TemperatureF";
pub const COL_DEW_MAX: &str = "Max Dew PointF";
pub const COL_DEW_AVG: &str = "MeanDew PointF";
pub const COL_DEW_MIN: &str = "Min DewpointF";
pub const COL_HUMIDITY_MAX: &str = "Max Humidity";
pub const COL_HUMIDITY_AVG: &str = "Mean Humidity";
pub const COL_HUMIDITY_MIN: &str = "Min Humidity";
pub const COL_PRESSURE_MAX: &str = "Max Sea Level PressureIn";
pub const COL_PRESSURE_AVG: &str = "Mean Sea Level PressureIn";
pub const COL_PRESSURE_MIN: &str = "Min Sea Level PressureIn";
pub const COL_VISIBILITY_MAX: &str = "Max VisibilityMiles";
pub const COL_VISIBILITY_AVG: &str = "Mean VisibilityMiles";
pub const COL_VISIBILITY_MIN: &str = "Min VisibilityMiles";
pub const COL_WIND_MAX: &str = "Max Wind SpeedMPH";
pub const COL_WIND_AVG: &str = "Mean Wind SpeedMPH";
pub const COL_GUST_MAX: &str = "Max Gust SpeedMPH";
pub const COL_PRECIPITATION: &str = "PrecipitationIn";
pub const COL_CLOUD_COVER: &str = "CloudCover";
pub const COL_EVENTS: &str = "Events";
pub const COL_WIND_DIRECTION: &str = "WindDirDegrees";

/// Event tokens
pub const EVENT_FOG: &str = "Fog";
pub const EVENT_RAIN: &str = "Rain";
pub const EVENT_THUNDERSTORM: &str = "Thunderstorm";
pub const EVENT_SNOW: &str = "Snow";

/// I/O defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Workload parameters
pub const HOT_DAY_THRESHOLD_F: i32 = 90;
pub const CLOUD_WINDOW_START_YEAR: i32 = 1980;
pub const CLOUD_WINDOW_END_YEAR: i32 = 2000;
pub const COLDEST_RAINY_DAYS: usize = 5;
pub const MANUAL_SUFFIX: &str = " - manual";
