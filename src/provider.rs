//! Access to a remote source of public holidays

use async_trait::async_trait;
use log::debug;
use thiserror::Error;

use crate::config::TrackerConfig;
use crate::holiday::{decode_holidays, Holiday};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected server response {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid holiday record: {0}")]
    InvalidRecord(String),
}

/// General interface for public holiday providers
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Fetch all public holidays of the given year
    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, FetchError>;
}

/// Provider for the public Nager.Date REST service
pub struct NagerDate {
    client: reqwest::Client,
    base_url: String,
    country_code: String,
}

impl NagerDate {
    pub fn new(base_url: &str, country_code: &str) -> NagerDate {
        Self::with_client(reqwest::Client::new(), base_url, country_code)
    }

    /// Use a preconfigured HTTP client, e.g. with custom timeouts or proxies
    pub fn with_client(client: reqwest::Client, base_url: &str, country_code: &str) -> NagerDate {
        NagerDate {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            country_code: country_code.to_string(),
        }
    }

    pub fn from_config(config: &TrackerConfig) -> NagerDate {
        Self::new(&config.base_url, &config.country_code)
    }

    pub fn url(&self, year: i32) -> String {
        format!("{}/{}/{}", self.base_url, year, self.country_code)
    }
}

#[async_trait]
impl HolidayProvider for NagerDate {
    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, FetchError> {
        let url = self.url(year);
        debug!("fetching public holidays from {}", url);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: resp.status().as_u16(),
                url,
            });
        }
        let body = resp.text().await?;
        decode_holidays(&body)
    }
}
