use std::fmt;

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher, PasswordVerifier, Version};
use thiserror::Error;

/// A plaintext password as submitted by the user. Never logged.
#[derive(Clone, PartialEq)]
pub struct Password(String);

impl Password {
    pub fn parse(password: String) -> Result<Password, String> {
        if password.is_empty() {
            return Err("Password must not be empty".to_owned());
        }
        Ok(Password(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(..)")
    }
}

#[derive(Error, Debug)]
pub enum PasswordHashError {
    #[error("failed to hash or parse password hash")]
    Hashing,

    #[error("password hashing task failed")]
    Task(#[from] tokio::task::JoinError),
}

/// Argon2id PHC string stored in place of the password.
#[derive(Clone, PartialEq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hashes on the blocking pool.
    pub async fn from_password(password: &Password) -> Result<Self, PasswordHashError> {
        let password = password.clone();
        tokio::task::spawn_blocking(move || {
            let params =
                Params::new(15000, 2, 1, None).map_err(|_| PasswordHashError::Hashing)?;
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);
            let hash = argon2
                .hash_password(password.as_ref().as_bytes(), &salt)
                .map_err(|_| PasswordHashError::Hashing)?
                .to_string();
            Ok(PasswordHash(hash))
        })
        .await?
    }

    /// Wraps an already computed PHC string.
    pub fn from_phc(hash: String) -> Self {
        PasswordHash(hash)
    }

    pub async fn verify(&self, password: &Password) -> Result<bool, PasswordHashError> {
        let hash = self.0.clone();
        let password = password.clone();
        tokio::task::spawn_blocking(move || {
            let parsed =
                argon2::PasswordHash::new(&hash).map_err(|_| PasswordHashError::Hashing)?;
            Ok(Argon2::default()
                .verify_password(password.as_ref().as_bytes(), &parsed)
                .is_ok())
        })
        .await?
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
