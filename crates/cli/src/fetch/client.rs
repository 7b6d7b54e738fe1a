use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use log::info;
use reqwest::StatusCode;
use reqwest::blocking::Client;

use skychart_weather::WeatherData;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

pub(crate) struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    pub fn new() -> DatasetClient {
        Self {
            client: Client::new(),
        }
    }

    /// Downloads the dataset at `url` into `path`.
    ///
    /// The response body must parse as an array of daily weather records;
    /// nothing is written to disk otherwise.
    pub fn download(&self, url: &str, path: &Path) -> Result<u64> {
        let response = self.client.get(url).send()?;

        match response.status() {
            StatusCode::OK => {
                let body = response.bytes()?;
                let data = WeatherData::from_slice(&body)?;
                info!("fetched {count} weather records", count = data.len());

                let mut writer = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(path)?;

                writer.write_all(&body)?;

                Ok(body.len() as u64)
            }
            status_code => {
                let message = response.text()?;
                let error = FetchError::Response {
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }
}
