//! Session token issuance and local verification.
//!
//! Tokens are HS256 JWTs carrying only the identity id (`sub`), issue time
//! and expiry. Nothing is kept server side: a token is accepted when its
//! signature matches the process-wide secret and `exp` has not passed.
//! Whether the subject still exists is checked by the caller against the
//! credential store (see `AuthService::verify_token`).
//!
//! Errors:
//! - Expiry is reported as `TokenRejection::Expired`, and only for tokens
//!   whose signature is valid. Any other decoding failure (bad signature,
//!   malformed token, missing claims) is `TokenRejection::Invalid`.
//!
//! Time:
//! - All timestamps are UTC epoch seconds and expiry is checked with zero
//!   leeway.
use auth_contract::TokenRejection;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::domain::{SessionClaims, SessionToken, UserId};
use crate::utils::config::Config;

#[derive(Error, Debug)]
pub enum IssueTokenError {
    #[error("token lifetime is out of range")]
    InvalidLifetime,

    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(config: &Config) -> Self {
        Self::from_secret(config.jwt_secret().as_bytes(), config.token_ttl_seconds())
    }

    pub fn from_secret(secret: &[u8], ttl_seconds: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_seconds,
        }
    }

    /// Issue a token for `user_id` expiring one TTL from now.
    pub fn issue(&self, user_id: UserId) -> Result<SessionToken, IssueTokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`.
    pub fn issue_at(
        &self,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<SessionToken, IssueTokenError> {
        let delta =
            Duration::try_seconds(self.ttl_seconds).ok_or(IssueTokenError::InvalidLifetime)?;
        let expires_at = issued_at
            .checked_add_signed(delta)
            .ok_or(IssueTokenError::InvalidLifetime)?;

        let claims = SessionClaims {
            sub: user_id.value(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(SessionToken::new(token, expires_at))
    }

    /// Check signature and expiry; does not consult the credential store.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, TokenRejection> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenRejection::Expired,
                _ => TokenRejection::Invalid,
            })
    }
}
