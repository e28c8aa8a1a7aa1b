//! Configuration of the supported years and the holiday API endpoint

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3/PublicHolidays";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No years configured")]
    NoYears,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Years to load and to accept in year queries, in load order
    pub years: Vec<i32>,
    /// Country code used as path segment of the API endpoint
    pub country_code: String,
    pub base_url: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            years: vec![2023, 2024, 2025],
            country_code: "TR".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Parse configuration from JSON, fields not given keep their default
    pub fn from_json(json: &str) -> Result<TrackerConfig, ConfigError> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<TrackerConfig, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.years.is_empty() {
            return Err(ConfigError::NoYears);
        }
        Ok(())
    }

    pub fn is_supported_year(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// Range of configured years for display, e.g. `2023-2025`
    pub fn year_span(&self) -> String {
        let first = self.years.iter().min();
        let last = self.years.iter().max();
        match (first, last) {
            (Some(first), Some(last)) if first != last => format!("{}-{}", first, last),
            (Some(first), _) => first.to_string(),
            _ => String::new(),
        }
    }
}
