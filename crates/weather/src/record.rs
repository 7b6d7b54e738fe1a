//! The daily weather record and its accessors.

use std::fmt::Display;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Result;
use crate::error::WeatherError;

/// The format of the [`WeatherRecord`] date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day of weather observations.
///
/// The record mirrors the JSON dataset field names, which use camel case.
/// Values are taken as they come: the probabilities and the cloud cover are
/// expected in the `[0, 1]` interval and the temperatures in degrees
/// Fahrenheit, but no validation is performed on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// The observation date in the `YYYY-MM-DD` format.
    pub date: String,

    /// The minimum temperature of the day, in degrees Fahrenheit.
    pub temperature_min: f64,

    /// The maximum temperature of the day, in degrees Fahrenheit.
    pub temperature_max: f64,

    /// The maximum UV index of the day.
    pub uv_index: f64,

    /// The probability of precipitation, between 0 and 1.
    pub precip_probability: f64,

    /// The type of precipitation. Dry days do not carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precip_type: Option<PrecipType>,

    /// The cloud cover fraction, between 0 and 1.
    pub cloud_cover: f64,

    /// The relative humidity, between 0 and 1.
    pub humidity: f64,
}

impl WeatherRecord {
    /// Parses the record date.
    ///
    /// This is the only fallible accessor; the remaining fields are read
    /// directly from the record.
    pub fn day(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|error| {
            WeatherError::DateParse {
                date: self.date.clone(),
                error,
            }
        })
    }
}

/// The precipitation type of a wet day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecipType {
    Rain,
    Sleet,
    Snow,
}

impl Display for PrecipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrecipType::Rain => write!(f, "rain"),
            PrecipType::Sleet => write!(f, "sleet"),
            PrecipType::Snow => write!(f, "snow"),
        }
    }
}
