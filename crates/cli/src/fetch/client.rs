use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

pub(crate) const GDP_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";
pub(crate) const CYCLING_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

pub(crate) struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    pub fn new() -> Self {
        let client = Client::new();

        Self { client }
    }

    /// One GET per chart against a fixed endpoint. No authentication,
    /// no retry, no pagination.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text()?;
                Ok(body)
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
