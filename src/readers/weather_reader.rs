use crate::error::{BenchError, Result};
use crate::models::{EventFlags, WeatherPoint};
use crate::utils::constants::*;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use encoding_rs::Encoding;
use memmap2::Mmap;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Load a weather CSV, writing header diagnostics for rejected rows to stdout.
pub fn load_weather(path: &Path) -> Result<Vec<WeatherPoint>> {
    let reader = WeatherReader::new();
    let report = reader.read_weather(path, &mut std::io::stdout().lock())?;
    Ok(report.points)
}

/// What happened to a single data row.
#[derive(Debug)]
pub enum RowOutcome {
    Parsed(WeatherPoint),
    /// Fewer than the required number of fields; skipped without diagnostics
    Incomplete { fields: usize },
    /// Well-formed row with a missing or unparseable value
    Rejected(BenchError),
}

/// Result of loading a file: the points in file order plus skip counts.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub headers: Vec<String>,
    pub points: Vec<WeatherPoint>,
    pub incomplete_rows: usize,
    pub rejected_rows: usize,
}

impl LoadReport {
    pub fn data_rows(&self) -> usize {
        self.points.len() + self.incomplete_rows + self.rejected_rows
    }
}

pub struct WeatherReader {
    use_mmap: bool,
    encoding: &'static Encoding,
}

impl WeatherReader {
    pub fn new() -> Self {
        Self {
            use_mmap: false,
            encoding: encoding_rs::UTF_8,
        }
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    /// Fallback encoding used when the file carries no byte order mark
    pub fn with_encoding(mut self, label: &str) -> Result<Self> {
        self.encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| BenchError::Encoding(label.to_string()))?;
        Ok(self)
    }

    /// Read every row of the file at `path`.
    ///
    /// Only failing to open, read or decode the file is an error. Rows with
    /// too few fields are skipped; rows that fail to parse are discarded and
    /// the header names are written to `diagnostics`, one per line.
    pub fn read_weather<W: Write>(&self, path: &Path, diagnostics: &mut W) -> Result<LoadReport> {
        info!(path = %path.display(), mmap = self.use_mmap, "loading weather data");

        let report = if self.use_mmap {
            let file = File::open(path)?;
            let mmap = unsafe { Mmap::map(&file)? };
            let text = self.decode(&mmap);
            self.read_str(&text, diagnostics)?
        } else {
            let file = File::open(path)?;
            let mut reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes)?;
            let text = self.decode(&bytes);
            self.read_str(&text, diagnostics)?
        };

        info!(
            points = report.points.len(),
            incomplete = report.incomplete_rows,
            rejected = report.rejected_rows,
            "weather data loaded"
        );
        Ok(report)
    }

    /// Parse already-decoded CSV text. The first line is the header row.
    pub fn read_str<W: Write>(&self, text: &str, diagnostics: &mut W) -> Result<LoadReport> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(text.as_bytes());

        let mut rows = csv_reader.records();
        let headers = match rows.next() {
            Some(header_row) => header_row?,
            None => {
                warn!("weather data has no header row");
                return Ok(LoadReport::default());
            }
        };

        let mut report = LoadReport {
            headers: headers.iter().map(str::to_string).collect(),
            ..Default::default()
        };

        for row in rows {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();

            match parse_row(&headers, &row) {
                RowOutcome::Parsed(point) => report.points.push(point),
                RowOutcome::Incomplete { fields } => {
                    debug!(line, fields, "skipping incomplete row");
                    report.incomplete_rows += 1;
                }
                RowOutcome::Rejected(error) => {
                    warn!(line, %error, "discarding unparseable row");
                    for header in &report.headers {
                        writeln!(diagnostics, "{}", header)?;
                    }
                    report.rejected_rows += 1;
                }
            }
        }

        Ok(report)
    }

    fn decode<'b>(&self, bytes: &'b [u8]) -> Cow<'b, str> {
        let (text, used, had_errors) = self.encoding.decode(bytes);
        if had_errors {
            warn!(encoding = used.name(), "input contained malformed sequences");
        }
        text
    }
}

impl Default for WeatherReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank values and the trace-precipitation marker read as zero
pub fn normalize_placeholder(value: &str) -> &str {
    if value.is_empty() || value == TRACE_MARKER {
        PLACEHOLDER_VALUE
    } else {
        value
    }
}

/// Classify and convert one data row against the header row.
pub fn parse_row(headers: &StringRecord, row: &StringRecord) -> RowOutcome {
    if row.len() < MIN_FIELDS_PER_ROW {
        return RowOutcome::Incomplete { fields: row.len() };
    }

    match RowFields::new(headers, row).to_point() {
        Ok(point) => RowOutcome::Parsed(point),
        Err(error) => RowOutcome::Rejected(error),
    }
}

/// Header name to normalized value for one row. Values pair with headers by
/// position; extra values are ignored and a repeated header keeps the last.
struct RowFields<'r> {
    values: HashMap<&'r str, &'r str>,
}

impl<'r> RowFields<'r> {
    fn new(headers: &'r StringRecord, row: &'r StringRecord) -> Self {
        let values = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header, normalize_placeholder(value)))
            .collect();
        Self { values }
    }

    fn get(&self, column: &str) -> Result<&'r str> {
        self.values
            .get(column)
            .copied()
            .ok_or_else(|| BenchError::MissingColumn {
                column: column.to_string(),
            })
    }

    fn parse<T>(&self, column: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self.get(column)?;
        value
            .trim()
            .parse::<T>()
            .map_err(|e| BenchError::InvalidField {
                column: column.to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    fn to_point(&self) -> Result<WeatherPoint> {
        let date = NaiveDate::parse_from_str(self.get(COL_DATE)?, DATE_FORMAT)?;
        let events = EventFlags::parse(self.get(COL_EVENTS)?);

        Ok(WeatherPoint {
            date,
            temp_max: self.parse(COL_TEMP_MAX)?,
            temp_avg: self.parse(COL_TEMP_AVG)?,
            temp_min: self.parse(COL_TEMP_MIN)?,
            dew_max: self.parse(COL_DEW_MAX)?,
            dew_avg: self.parse(COL_DEW_AVG)?,
            dew_min: self.parse(COL_DEW_MIN)?,
            humidity_max: self.parse(COL_HUMIDITY_MAX)?,
            humidity_avg: self.parse(COL_HUMIDITY_AVG)?,
            humidity_min: self.parse(COL_HUMIDITY_MIN)?,
            pressure_max: self.parse(COL_PRESSURE_MAX)?,
            pressure_avg: self.parse(COL_PRESSURE_AVG)?,
            pressure_min: self.parse(COL_PRESSURE_MIN)?,
            visibility_max: self.parse(COL_VISIBILITY_MAX)?,
            visibility_avg: self.parse(COL_VISIBILITY_AVG)?,
            visibility_min: self.parse(COL_VISIBILITY_MIN)?,
            windspeed_max: self.parse(COL_WIND_MAX)?,
            windspeed_avg: self.parse(COL_WIND_AVG)?,
            gustspeed_max: self.parse(COL_GUST_MAX)?,
            precipitation: self.parse(COL_PRECIPITATION)?,
            cloud_cover: self.parse(COL_CLOUD_COVER)?,
            fog: events.fog,
            rain: events.rain,
            thunderstorm: events.thunderstorm,
            snow: events.snow,
            wind_direction: self.parse(COL_WIND_DIRECTION)?,
        })
    }
}
