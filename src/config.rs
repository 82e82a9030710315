//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so values are baked in with
//! `option_env!` when the crate is compiled:
//!
//! - `TASKS_API_BASE`: REST API origin, default `http://127.0.0.1:8000`
//! - `TASKS_REQUEST_TIMEOUT_MS`: per-request timeout, default 15000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("TASKS_API_BASE must be an http(s) origin, got '{0}'")]
    InvalidBase(String),
    #[error("TASKS_REQUEST_TIMEOUT_MS must be a positive integer, got '{0}'")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin without a trailing slash.
    pub api_base: String,
    pub request_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS }
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a captured value is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("TASKS_API_BASE"), option_env!("TASKS_REQUEST_TIMEOUT_MS"))
    }

    /// Build config from raw optional values, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value is malformed.
    pub fn from_values(api_base: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let api_base = parse_api_base(api_base.unwrap_or(DEFAULT_API_BASE))?;
        let request_timeout_ms = match timeout_ms {
            Some(raw) => parse_timeout_ms(raw)?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };
        Ok(Self { api_base, request_timeout_ms })
    }

    /// Absolute URL for an API path such as `/register`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base)
        } else {
            format!("{}/{path}", self.api_base)
        }
    }
}

fn parse_api_base(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed.split_once("://").is_some_and(|(_, host)| !host.is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::InvalidBase(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn parse_timeout_ms(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
