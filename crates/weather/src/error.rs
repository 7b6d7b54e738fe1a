//! Defines the error type for reading weather datasets.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;

use chrono::ParseError;
use serde_json::Error as JsonError;

/// The result type that uses [`WeatherError`] as the error type.
pub type Result<T> = std::result::Result<T, WeatherError>;

/// The error type for reading a weather dataset.
///
/// Errors originate from I/O read operations, JSON deserialization
/// and parsing record dates.
#[derive(Debug)]
pub enum WeatherError {
    /// A [`std::io::Error`] encountered while reading the dataset file.
    Io(io::Error),

    /// A [`serde_json::Error`] encountered while deserializing records.
    Json(JsonError),

    /// A [`chrono::ParseError`] encountered while parsing a record date.
    /// The record dates are expected in the `YYYY-MM-DD` format.
    DateParse { date: String, error: ParseError },
}

impl Display for WeatherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let weather_error = "weather data error:";

        match self {
            WeatherError::Io(error) => write!(f, "{weather_error} I/O error: {error}"),
            WeatherError::Json(error) => {
                write!(f, "{weather_error} JSON deserialization error: {error}")
            }
            WeatherError::DateParse { date, error } => write!(
                f,
                "{weather_error} could not parse the \"{date}\" record date: {error}"
            ),
        }
    }
}

impl Error for WeatherError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WeatherError::Io(error) => Some(error),
            WeatherError::Json(error) => Some(error),
            WeatherError::DateParse { error, .. } => Some(error),
        }
    }
}

impl From<io::Error> for WeatherError {
    fn from(error: io::Error) -> Self {
        WeatherError::Io(error)
    }
}

impl From<JsonError> for WeatherError {
    fn from(error: JsonError) -> Self {
        WeatherError::Json(error)
    }
}
