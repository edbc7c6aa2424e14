use std::env;

use crate::error::ConfigError;

/// Environment variable holding the account service base URL
pub const API_BASE_URL_VAR: &str = "DELETION_API_BASE_URL";

/// Environment variable overriding the request timeout (seconds)
pub const TIMEOUT_SECS_VAR: &str = "DELETION_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the account service, without a trailing slash
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// The base URL is required; the timeout falls back to 10 seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = env::var(API_BASE_URL_VAR)
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingVar(API_BASE_URL_VAR))?;

        let timeout_secs = match env::var(TIMEOUT_SECS_VAR) {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: TIMEOUT_SECS_VAR,
                    value: raw,
                })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url,
            timeout_secs,
        })
    }
}
