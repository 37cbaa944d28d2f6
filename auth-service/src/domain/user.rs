use std::fmt;

use auth_contract::IdentityClaims;

use super::{email::Email, password::PasswordHash};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        UserId(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A credential record before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: Email,
    pub password_hash: PasswordHash,
}

impl NewUser {
    pub fn new(username: String, email: Email, password_hash: PasswordHash) -> Self {
        NewUser {
            username,
            email,
            password_hash,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Email,
    pub password_hash: PasswordHash,
}

impl User {
    pub fn from_new(id: UserId, user: NewUser) -> Self {
        User {
            id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
        }
    }

    pub fn claims(&self) -> IdentityClaims {
        IdentityClaims {
            user_id: self.id.value(),
            username: self.username.clone(),
            email: self.email.as_ref().to_owned(),
        }
    }
}
