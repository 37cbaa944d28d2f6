use serde::{Deserialize, Serialize};

/// JWT payload of a session token. Timestamps are UTC epoch seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    pub sub: i64, // identity id
    pub iat: i64,
    pub exp: i64,
}
