// SPDX-License-Identifier: MIT

//! Centralized environment variable access for the daemon binary.

use std::time::Duration;

const DEFAULT_HTTP_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 10;
// Development fallbacks only — every production deployment is expected to
// override these. A missing database just means the daemon starts in
// offline mode (see `main::connect_database`), so it gets a default here
// rather than refusing to boot.
const DEFAULT_DATABASE_URL: &str = "mysql://fairusinampratama@127.0.0.1:3306/netengine";
pub(crate) const DEFAULT_API_SECRET: &str = "netengine_secret_key_123";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub http_bind_addr: String,
    pub webhook_url: Option<String>,
    pub api_secret: String,
    pub refresh_interval: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be a positive integer, got {1:?}")]
    InvalidInt(&'static str, String),
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a `Config` from an arbitrary key lookup, so tests never need
    /// to touch the process's actual environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|v| !v.is_empty()).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let api_secret = lookup("API_SECRET").filter(|v| !v.is_empty()).unwrap_or_else(|| DEFAULT_API_SECRET.to_string());
        let http_bind_addr = lookup("HTTP_BIND_ADDR").unwrap_or_else(|| DEFAULT_HTTP_BIND_ADDR.to_string());
        let webhook_url = lookup("WEBHOOK_URL").filter(|v| !v.is_empty());
        let refresh_interval = Duration::from_secs(parse_u64(&lookup, "REFRESH_INTERVAL_SECS", DEFAULT_REFRESH_INTERVAL_SECS)?);

        Ok(Self {
            database_url,
            http_bind_addr,
            webhook_url,
            api_secret,
            refresh_interval,
        })
    }
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidInt(key, raw)),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
