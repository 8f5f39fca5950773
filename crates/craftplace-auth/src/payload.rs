//! Token claims.
//!
//! A [`Payload`] is what a signed token carries: who the caller is, in which
//! role, and until when the token is valid. Payloads are immutable; the only
//! ways to obtain one are [`Payload::new`] at issuance and decoding a verified
//! token.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

/// Role a token was issued for.
///
/// The service only ever issues [`Role::User`]. Any other role name found in a
/// correctly signed token is kept verbatim in [`Role::Other`], so a mismatch is
/// reported as a wrong role instead of a malformed token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Other(String),
}

impl Role {
    pub const USER: &'static str = "user";

    pub fn as_str(&self) -> &str {
        match self {
            Role::User => Self::USER,
            Role::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        if name == Self::USER {
            Role::User
        } else {
            Role::Other(name)
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::from(name.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::User => Role::USER.to_string(),
            Role::Other(name) => name,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    person_id: Uuid,
    role: Role,
    issued_at: DateTime<Utc>,
    expired_at: DateTime<Utc>,
}

impl Payload {
    /// Builds a payload that expires `duration` from now.
    ///
    /// A zero or negative `duration` is accepted and produces a payload that is
    /// already expired.
    pub fn new(person_id: Uuid, role: Role, duration: Duration) -> Result<Self, AuthError> {
        let issued_at = Utc::now();
        let expired_at = issued_at
            .checked_add_signed(duration)
            .ok_or(AuthError::InvalidDuration)?;

        Ok(Self {
            person_id,
            role,
            issued_at,
            expired_at,
        })
    }

    pub fn person_id(&self) -> Uuid {
        self.person_id
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expired_at(&self) -> DateTime<Utc> {
        self.expired_at
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expired_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
