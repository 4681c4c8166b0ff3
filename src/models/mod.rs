pub mod weather_point;

pub use weather_point::{EventFlags, WeatherPoint};
