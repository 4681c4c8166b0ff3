pub mod weather_analyzer;
pub mod weather_queries;

pub use weather_analyzer::{LoadQuality, WeatherAnalyzer, WeatherStatistics};
