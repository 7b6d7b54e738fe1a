//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use serde_json::Error as JsonError;
use skychart_weather::error::WeatherError;
use tinytemplate::error::Error as TinyTemplateError;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for generating a visualization report
/// of a weather dataset.
#[derive(Debug)]
pub enum VisError {
    /// A [std::io::Error] encountered while generating files
    /// for the data visualization.
    Io(IoError),

    /// A [tinytemplate::error::Error] encountered while rendering
    /// a template file.
    Template(TinyTemplateError),

    /// A [serde_json::Error] encountered while serializing chart
    /// page data.
    Json(JsonError),

    /// A [skychart_weather::error::WeatherError] encountered while
    /// reading records of the dataset being charted.
    Weather(WeatherError),
}

impl Error for VisError {}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::Io(error) => write!(f, "{vis_error} I/O error: {error}"),
            VisError::Template(error) => write!(f, "{vis_error} template error: {error}"),
            VisError::Json(error) => write!(f, "{vis_error} JSON serialization error: {error}"),
            VisError::Weather(error) => write!(f, "{vis_error} dataset error: {error}"),
        }
    }
}

impl From<TinyTemplateError> for VisError {
    fn from(error: TinyTemplateError) -> Self {
        VisError::Template(error)
    }
}

impl From<IoError> for VisError {
    fn from(error: IoError) -> Self {
        VisError::Io(error)
    }
}

impl From<JsonError> for VisError {
    fn from(error: JsonError) -> Self {
        VisError::Json(error)
    }
}

impl From<WeatherError> for VisError {
    fn from(error: WeatherError) -> Self {
        VisError::Weather(error)
    }
}
