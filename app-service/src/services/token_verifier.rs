//! Delegated token verification.
//!
//! The relying service never decides on a token itself. Every check is one
//! `POST /verify-token` round-trip to the identity authority, never cached.
//! The configured timeout bounds the whole check, retry included.
use std::time::Duration;

use async_trait::async_trait;
use auth_contract::{token_prefix, IdentityClaims, MessageBody, VerifyTokenRequestBody};
use axum::http::StatusCode;
use reqwest::Client;

use crate::errors::AuthorityError;
use crate::utils::{Config, VERIFY_TOKEN_PATH};

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, AuthorityError>;
}

/// Asks the identity authority over HTTP.
pub struct HttpTokenVerifier {
    client: Client,
    verify_url: String,
    timeout: Duration,
    retry_on_connect: bool,
}

impl HttpTokenVerifier {
    pub fn new(
        auth_service_url: &str,
        timeout: Duration,
        retry_on_connect: bool,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        let verify_url = format!(
            "{}{}",
            auth_service_url.trim_end_matches('/'),
            VERIFY_TOKEN_PATH
        );

        Ok(Self {
            client,
            verify_url,
            timeout,
            retry_on_connect,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.auth_service_url(),
            config.verify_timeout(),
            config.retry_on_connect(),
        )
    }

    async fn send(&self, token: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .post(&self.verify_url)
            .json(&VerifyTokenRequestBody::new(token))
            .send()
            .await
    }

    async fn delegate(&self, token: &str, prefix: &str) -> Result<IdentityClaims, AuthorityError> {
        // only a refused or failed connection is retried, never a timeout
        let response = match self.send(token).await {
            Ok(response) => Ok(response),
            Err(e) if self.retry_on_connect && e.is_connect() => {
                log::warn!("Retrying verification of {}... after: {}", prefix, e);
                self.send(token).await
            }
            Err(e) => Err(e),
        }
        .map_err(|e| {
            log::error!("Verification of {}... failed: {}", prefix, e);
            AuthorityError::VerificationUnavailable
        })?;

        let status = response.status().as_u16();
        if status == StatusCode::OK.as_u16() {
            let claims = response.json::<IdentityClaims>().await.map_err(|e| {
                log::error!("Unreadable verification response for {}...: {}", prefix, e);
                AuthorityError::VerificationUnavailable
            })?;
            log::info!("Token {}... verified for user {}", prefix, claims.user_id);
            return Ok(claims);
        }

        let status =
            StatusCode::from_u16(status).map_err(|_| AuthorityError::VerificationUnavailable)?;
        let message = match response.json::<MessageBody>().await {
            Ok(body) => body.message,
            // not the authority speaking, e.g. a gateway error page
            Err(_) if status.is_server_error() => {
                log::error!("Authority unavailable for {}... ({})", prefix, status);
                return Err(AuthorityError::VerificationUnavailable);
            }
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_owned(),
        };

        log::info!("Token {}... rejected ({}): {}", prefix, status, message);
        Err(AuthorityError::Rejected { status, message })
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &str) -> Result<IdentityClaims, AuthorityError> {
        let prefix = token_prefix(token);

        match tokio::time::timeout(self.timeout, self.delegate(token, &prefix)).await {
            Ok(result) => result,
            Err(_) => {
                log::error!(
                    "Verification of {}... timed out after {:?}",
                    prefix,
                    self.timeout
                );
                Err(AuthorityError::VerificationUnavailable)
            }
        }
    }
}

