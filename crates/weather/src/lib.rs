//! A library for reading and filtering daily weather datasets.
//!
//! The dataset is a JSON array of daily observations, one object per day,
//! with camel-case field names. [`WeatherData`] reads the whole dataset into
//! memory; the records are read-only afterwards.

mod filter;

pub mod error;
pub mod record;

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

pub use crate::filter::DateFilter;

use crate::error::Result;
use crate::record::WeatherRecord;

/// An in-memory weather dataset.
#[derive(Debug, Clone)]
pub struct WeatherData {
    records: Vec<WeatherRecord>,
}

impl WeatherData {
    pub fn new(records: Vec<WeatherRecord>) -> WeatherData {
        Self { records }
    }

    /// Reads a dataset from a JSON file.
    pub fn from_path(path: &Path) -> Result<WeatherData> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads a dataset from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<WeatherData> {
        let records: Vec<WeatherRecord> = serde_json::from_reader(reader)?;
        Ok(Self { records })
    }

    /// Reads a dataset from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<WeatherData> {
        let records: Vec<WeatherRecord> = serde_json::from_slice(bytes)?;
        Ok(Self { records })
    }

    /// Returns the records that fall within the given date range,
    /// preserving the dataset order.
    pub fn filter(self, filter: &DateFilter) -> WeatherData {
        let records = self
            .records
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IntoIterator for WeatherData {
    type Item = WeatherRecord;

    type IntoIter = std::vec::IntoIter<WeatherRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    const DATASET: &str = r#"[
        {
            "date": "2018-01-01",
            "temperatureMin": 18.4,
            "temperatureMax": 31.2,
            "uvIndex": 1,
            "precipProbability": 0.0,
            "cloudCover": 0.1,
            "humidity": 0.52
        },
        {
            "date": "2018-01-02",
            "temperatureMin": 12.1,
            "temperatureMax": 24.9,
            "uvIndex": 1,
            "precipProbability": 0.8,
            "precipType": "snow",
            "cloudCover": 0.92,
            "humidity": 0.61
        },
        {
            "date": "2018-01-03",
            "temperatureMin": 15.0,
            "temperatureMax": 28.7,
            "uvIndex": 2,
            "precipProbability": 0.3,
            "precipType": "sleet",
            "cloudCover": 0.55,
            "humidity": 0.58
        }
    ]"#;

    #[test]
    fn from_slice_reads_all_records() {
        let data = WeatherData::from_slice(DATASET.as_bytes()).unwrap();

        assert_eq!(data.len(), 3);
        assert_eq!(data.records()[0].date, "2018-01-01");
        assert_eq!(data.records()[2].date, "2018-01-03");
    }

    #[test]
    fn from_slice_returns_error_for_malformed_json() {
        let result = WeatherData::from_slice(b"{ not a dataset ]");

        assert!(matches!(result, Err(error::WeatherError::Json(_))));
    }

    #[test]
    fn filter_retains_records_within_the_date_range() {
        let data = WeatherData::from_slice(DATASET.as_bytes()).unwrap();
        let filter = DateFilter::new(
            NaiveDate::from_ymd_opt(2018, 1, 2),
            NaiveDate::from_ymd_opt(2018, 1, 2),
        );

        let filtered = data.filter(&filter);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].date, "2018-01-02");
    }

    #[test]
    fn temperature_band_precondition_holds_for_the_dataset() {
        let data = WeatherData::from_slice(DATASET.as_bytes()).unwrap();

        for record in data.records() {
            assert!(record.temperature_min <= record.temperature_max);
        }
    }
}
