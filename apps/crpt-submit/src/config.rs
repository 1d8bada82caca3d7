//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crpt_core::domain::{RateLimitPolicy, TimeUnit};
use crpt_core::submission::DEFAULT_ENDPOINT;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Rate limit settings: `max_requests` per one `time_unit`.
#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    pub time_unit: TimeUnit,
    pub max_requests: u32,
}

impl RateLimitSettings {
    pub fn policy(&self) -> Result<RateLimitPolicy, ConfigError> {
        RateLimitPolicy::per_unit(self.time_unit, self.max_requests).map_err(|e| {
            ConfigError::Invalid {
                key: "RATE_LIMIT_MAX_REQUESTS",
                reason: e.to_string(),
            }
        })
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub auth_token: String,
    pub signature_file: PathBuf,
    pub rate_limit: RateLimitSettings,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_token = lookup("CRPT_AUTH_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("CRPT_AUTH_TOKEN"))?;

        let signature_file = lookup("CRPT_SIGNATURE_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("CRPT_SIGNATURE_FILE"))?;

        let time_unit = match lookup("RATE_LIMIT_TIME_UNIT") {
            Some(raw) => raw.parse().map_err(|e: crpt_core::DomainError| ConfigError::Invalid {
                key: "RATE_LIMIT_TIME_UNIT",
                reason: e.to_string(),
            })?,
            None => TimeUnit::Seconds,
        };

        let max_requests = parse_or("RATE_LIMIT_MAX_REQUESTS", &lookup, 10u32)?;
        let timeout_secs = parse_or("HTTP_TIMEOUT_SECS", &lookup, 30u64)?;

        let rate_limit = RateLimitSettings {
            time_unit,
            max_requests,
        };
        // Surface an unusable policy at startup rather than on first submit.
        rate_limit.policy()?;

        Ok(Self {
            api_url: lookup("CRPT_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            auth_token,
            signature_file,
            rate_limit,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
