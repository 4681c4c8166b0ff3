pub mod weather_reader;

pub use weather_reader::{
    load_weather, normalize_placeholder, parse_row, LoadReport, RowOutcome, WeatherReader,
};
