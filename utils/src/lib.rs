//! Shared utilities for the workspace binaries.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Loads `.env` from the working directory if there is one.
///
/// Runs before [`init_tracing`] so `RUST_LOG` may come from the file; the
/// caller logs the outcome once tracing is up.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(anyhow!("failed to load .env: {}", e)),
    }
}

/// Parses the environment variable `name`, `None` when it is unset or blank.
pub fn env_parse<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_setting(name, std::env::var(name).ok())
}

fn parse_setting<T>(name: &str, raw: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("invalid value {:?} for {}: {}", value, name, e)),
    }
}
