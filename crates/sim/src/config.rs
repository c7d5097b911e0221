//! Simulator configuration, read from environment variables.

use std::num::ParseIntError;

use gildedrose_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

use crate::fixture::FixtureOptions;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const LOG_FORMAT_VAR: &str = "GILDED_ROSE_LOG_FORMAT";
pub const EXCLUDE_VAR: &str = "GILDED_ROSE_EXCLUDE";

pub const DEFAULT_DAYS: u32 = 31;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GILDED_ROSE_DAYS must be a non-negative integer, got `{value}`: {source}")]
    InvalidDays {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("GILDED_ROSE_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),

    #[error(
        "GILDED_ROSE_EXCLUDE contains unknown group `{0}` (expected vintage, legendary, backstage, conjured)"
    )]
    UnknownGroup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of days to report, starting with the initial state as day 0.
    pub days: u32,
    pub log_format: LogFormat,
    pub fixture: FixtureOptions,
    /// Variables that were not set and fell back to their default.
    pub defaulted: Vec<&'static str>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            log_format: LogFormat::default(),
            fixture: FixtureOptions::default(),
            defaulted: Vec::new(),
        }
    }
}

impl SimConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SimConfig::default();

        match lookup(DAYS_VAR) {
            Some(value) => {
                let parsed = value.trim().parse::<u32>();
                config.days = parsed.map_err(|source| ConfigError::InvalidDays { value, source })?;
            }
            None => config.defaulted.push(DAYS_VAR),
        }

        match lookup(LOG_FORMAT_VAR) {
            Some(value) => config.log_format = value.parse()?,
            None => config.defaulted.push(LOG_FORMAT_VAR),
        }

        if let Some(value) = lookup(EXCLUDE_VAR) {
            for group in value.split(',').map(str::trim).filter(|g| !g.is_empty()) {
                match group {
                    "vintage" => config.fixture.include_vintage = false,
                    "legendary" => config.fixture.include_legendary = false,
                    "backstage" => config.fixture.include_backstage_passes = false,
                    "conjured" => config.fixture.include_conjured = false,
                    other => return Err(ConfigError::UnknownGroup(other.to_string())),
                }
            }
        }

        Ok(config)
    }
}
