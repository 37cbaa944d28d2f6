pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const TOKEN_TTL_SECONDS_ENV_VAR: &str = "TOKEN_TTL_SECONDS";
    pub const AUTH_SERVICE_ADDR_ENV_VAR: &str = "AUTH_SERVICE_ADDR";
    pub const APP_SERVICE_URL_ENV_VAR: &str = "APP_SERVICE_URL";
    pub const SEED_DEMO_USER_ENV_VAR: &str = "SEED_DEMO_USER";
}

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3600;
pub const DEFAULT_AUTH_SERVICE_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_APP_SERVICE_URL: &str = "http://localhost:3001";

pub mod demo_user {
    pub const USERNAME: &str = "testuser";
    pub const EMAIL: &str = "test@example.com";
    pub const PASSWORD: &str = "password";
}
