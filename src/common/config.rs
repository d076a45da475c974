use std::time::Duration;

use crate::common::ShapeShiftError;

pub const DEFAULT_BASE_URL: &str = "https://shapeshift.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const BASE_URL_ENV: &str = "SHAPESHIFT_BASE_URL";
const TIMEOUT_SECS_ENV: &str = "SHAPESHIFT_TIMEOUT_SECS";

/// Connection settings for [`crate::ShapeShift`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `SHAPESHIFT_BASE_URL` and `SHAPESHIFT_TIMEOUT_SECS`, loading a `.env`
    /// file first when one exists. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ShapeShiftError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ShapeShiftError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config = config.with_base_url(base_url.trim());
            }
        }

        if let Some(raw) = lookup(TIMEOUT_SECS_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                ShapeShiftError::InvalidArgument(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    TIMEOUT_SECS_ENV, raw
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
