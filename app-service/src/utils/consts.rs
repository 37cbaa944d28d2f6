pub mod env {
    pub const AUTH_SERVICE_URL_ENV_VAR: &str = "AUTH_SERVICE_URL";
    pub const VERIFY_TIMEOUT_SECONDS_ENV_VAR: &str = "VERIFY_TIMEOUT_SECONDS";
    pub const VERIFY_RETRY_ON_CONNECT_ENV_VAR: &str = "VERIFY_RETRY_ON_CONNECT";
    pub const APP_SERVICE_ADDR_ENV_VAR: &str = "APP_SERVICE_ADDR";
}

pub const DEFAULT_AUTH_SERVICE_URL: &str = "http://localhost:3000";
pub const DEFAULT_VERIFY_TIMEOUT_SECONDS: u64 = 5;
pub const DEFAULT_APP_SERVICE_ADDR: &str = "0.0.0.0:3001";

pub const VERIFY_TOKEN_PATH: &str = "/verify-token";
