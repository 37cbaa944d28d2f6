use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{
    env as keys, DEFAULT_APP_SERVICE_URL, DEFAULT_AUTH_SERVICE_ADDR, DEFAULT_TOKEN_TTL_SECONDS,
};

/// Process-wide settings, read once at startup.
///
/// Holds the signing secret, so there is no `Debug` impl.
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    token_ttl_seconds: i64,
    listen_addr: String,
    app_service_url: String,
    seed_demo_user: bool,
}

impl Config {
    /// Defaults for everything but the secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
            listen_addr: DEFAULT_AUTH_SERVICE_ADDR.to_owned(),
            app_service_url: DEFAULT_APP_SERVICE_URL.to_owned(),
            seed_demo_user: false,
        }
    }

    pub fn with_token_ttl_seconds(mut self, ttl: i64) -> Self {
        self.token_ttl_seconds = ttl;
        self
    }

    pub fn with_app_service_url(mut self, url: impl Into<String>) -> Self {
        self.app_service_url = url.into();
        self
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }
    pub fn app_service_url(&self) -> &str {
        &self.app_service_url
    }
    pub fn seed_demo_user(&self) -> bool {
        self.seed_demo_user
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let jwt_secret = req_var(keys::JWT_SECRET_ENV_VAR)?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid(keys::JWT_SECRET_ENV_VAR));
        }

        let token_ttl_seconds = match opt_var(keys::TOKEN_TTL_SECONDS_ENV_VAR) {
            Some(_) => parse_i64(keys::TOKEN_TTL_SECONDS_ENV_VAR)?,
            None => DEFAULT_TOKEN_TTL_SECONDS,
        };
        if token_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid(keys::TOKEN_TTL_SECONDS_ENV_VAR));
        }

        let listen_addr = opt_var(keys::AUTH_SERVICE_ADDR_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_AUTH_SERVICE_ADDR.into());
        let app_service_url = opt_var(keys::APP_SERVICE_URL_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_APP_SERVICE_URL.into());
        let seed_demo_user = parse_flag(keys::SEED_DEMO_USER_ENV_VAR)?;

        Ok(Self {
            jwt_secret,
            token_ttl_seconds,
            listen_addr,
            app_service_url,
            seed_demo_user,
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

fn parse_i64(key: &'static str) -> Result<i64, ConfigError> {
    let v = req_var(key)?;
    v.trim().parse::<i64>().map_err(|_| ConfigError::Invalid(key))
}

fn parse_flag(key: &'static str) -> Result<bool, ConfigError> {
    match opt_var(key).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("no") => Ok(false),
        Some(_) => Err(ConfigError::Invalid(key)),
    }
}
