use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{
    env as keys, DEFAULT_APP_SERVICE_ADDR, DEFAULT_AUTH_SERVICE_URL,
    DEFAULT_VERIFY_TIMEOUT_SECONDS,
};

#[derive(Debug, Clone)]
pub struct Config {
    auth_service_url: String,
    verify_timeout: Duration,
    retry_on_connect: bool,
    listen_addr: String,
}

impl Config {
    /// Defaults for everything but the authority's base URL.
    pub fn new(auth_service_url: impl Into<String>) -> Self {
        Self {
            auth_service_url: auth_service_url.into(),
            verify_timeout: Duration::from_secs(DEFAULT_VERIFY_TIMEOUT_SECONDS),
            retry_on_connect: false,
            listen_addr: DEFAULT_APP_SERVICE_ADDR.to_owned(),
        }
    }

    pub fn with_verify_timeout(mut self, timeout: Duration) -> Self {
        self.verify_timeout = timeout;
        self
    }

    pub fn with_retry_on_connect(mut self, retry: bool) -> Self {
        self.retry_on_connect = retry;
        self
    }

    pub fn auth_service_url(&self) -> &str {
        &self.auth_service_url
    }
    pub fn verify_timeout(&self) -> Duration {
        self.verify_timeout
    }
    pub fn retry_on_connect(&self) -> bool {
        self.retry_on_connect
    }
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let auth_service_url = opt_var(keys::AUTH_SERVICE_URL_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_AUTH_SERVICE_URL.into());

        let timeout_seconds = match opt_var(keys::VERIFY_TIMEOUT_SECONDS_ENV_VAR) {
            Some(_) => parse_u64(keys::VERIFY_TIMEOUT_SECONDS_ENV_VAR)?,
            None => DEFAULT_VERIFY_TIMEOUT_SECONDS,
        };
        if timeout_seconds == 0 {
            return Err(ConfigError::Invalid(keys::VERIFY_TIMEOUT_SECONDS_ENV_VAR));
        }

        let retry_on_connect = parse_flag(keys::VERIFY_RETRY_ON_CONNECT_ENV_VAR)?;
        let listen_addr = opt_var(keys::APP_SERVICE_ADDR_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_APP_SERVICE_ADDR.into());

        Ok(Self {
            auth_service_url,
            verify_timeout: Duration::from_secs(timeout_seconds),
            retry_on_connect,
            listen_addr,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_u64(key: &'static str) -> Result<u64, ConfigError> {
    let v = req_var(key)?;
    v.trim().parse::<u64>().map_err(|_| ConfigError::Invalid(key))
}

fn parse_flag(key: &'static str) -> Result<bool, ConfigError> {
    match opt_var(key).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("no") => Ok(false),
        Some(_) => Err(ConfigError::Invalid(key)),
    }
}
