use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://contract.mexc.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const ACCESS_KEY_ENV: &str = "MEXC_ACCESS_KEY";
pub const SECRET_KEY_ENV: &str = "MEXC_SECRET_KEY";
pub const BASE_URL_ENV: &str = "MEXC_BASE_URL";
pub const REQUEST_TIMEOUT_ENV: &str = "MEXC_REQUEST_TIMEOUT_SECS";

/// Configuration for MexcContractClient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MexcContractClientConfig {
    /// MEXC API access key, sent as the `ApiKey` header
    pub access_key: String,
    /// MEXC API secret key, only ever used as the HMAC key
    pub secret_key: String,
    /// Base URL for API endpoints
    pub base_url: String,
    /// Upper bound for a single request, including reading the body
    pub request_timeout: Duration,
}

impl MexcContractClientConfig {
    pub fn new(access_key: String, secret_key: String) -> Self {
        Self {
            access_key,
            secret_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Reads credentials and optional overrides from the process environment.
    ///
    /// Empty or missing credentials are rejected here so that no request is
    /// ever signed with an empty secret.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingCredential(name))
        };
        let mut config = Self::new(credential(ACCESS_KEY_ENV)?, credential(SECRET_KEY_ENV)?);

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup(REQUEST_TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSetting {
                    name: REQUEST_TIMEOUT_ENV,
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
