//! Configuration management for the Lead Validator.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present, without printing anything to stdout.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Value shipped in sample configs; treated the same as an unset key.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// Default email verification endpoint.
pub const DEFAULT_EMAIL_API_URL: &str = "https://api.apiverve.com/v1/emailvalidator";

/// Default phone verification endpoint.
pub const DEFAULT_PHONE_API_URL: &str = "https://api.apiverve.com/v1/phonenumbervalidator";

/// Configuration for the Lead Validator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key sent as `x-api-key` (None when unset)
    pub api_key: Option<String>,

    /// Email verification endpoint
    pub email_api_url: String,

    /// Phone verification endpoint
    pub phone_api_url: String,

    /// Address the HTTP server binds to (default: 127.0.0.1:3000)
    pub bind_address: String,

    /// Outbound HTTP timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `LEAD_VALIDATOR_API_KEY`: provider credential
    /// - `EMAIL_VALIDATOR_URL`: email endpoint
    /// - `PHONE_VALIDATOR_URL`: phone endpoint
    /// - `BIND_ADDRESS`: listen address (default: 127.0.0.1:3000)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: logging level (default: "info")
    ///
    /// A missing credential is not an error here; see [`Config::api_key`].
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let api_key = env::var("LEAD_VALIDATOR_API_KEY").ok();
        let email_api_url =
            env::var("EMAIL_VALIDATOR_URL").unwrap_or_else(|_| DEFAULT_EMAIL_API_URL.to_string());
        let phone_api_url =
            env::var("PHONE_VALIDATOR_URL").unwrap_or_else(|_| DEFAULT_PHONE_API_URL.to_string());

        Self::validate_url("EMAIL_VALIDATOR_URL", &email_api_url)?;
        Self::validate_url("PHONE_VALIDATOR_URL", &phone_api_url)?;

        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            api_key,
            email_api_url,
            phone_api_url,
            bind_address,
            request_timeout,
            log_level,
        })
    }

    /// Return the usable provider credential.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` when the key is unset, blank, or
    /// still set to [`PLACEHOLDER_API_KEY`].
    pub fn api_key(&self) -> ConfigResult<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY => Ok(key),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    /// Whether a usable credential is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key().is_ok()
    }

    fn validate_url(var_name: &str, url: &str) -> ConfigResult<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            email_api_url: DEFAULT_EMAIL_API_URL.to_string(),
            phone_api_url: DEFAULT_PHONE_API_URL.to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
