use std::fmt;

use auth_contract::token_prefix;
use chrono::{DateTime, Utc};

/// A signed session token as handed to the client.
#[derive(Clone, PartialEq)]
pub struct SessionToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl SessionToken {
    pub fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &format_args!("{}...", token_prefix(&self.value)))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
