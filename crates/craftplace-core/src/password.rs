//! Password hashing backed by bcrypt.
//!
//! Hashes are salted, so hashing the same password twice yields different
//! strings; [`check_password`] is the only way to compare.

use bcrypt::{DEFAULT_COST, hash, verify};
use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password must not be empty")]
    EmptyPassword,

    #[error("password does not match")]
    Mismatch,

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::EmptyPassword);
    }
    Ok(hash(password, DEFAULT_COST)?)
}

/// Succeeds only when `password` hashes to `hashed`.
pub fn check_password(password: &str, hashed: &str) -> Result<(), PasswordError> {
    if verify(password, hashed)? {
        Ok(())
    } else {
        Err(PasswordError::Mismatch)
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::EmptyPassword => AppError::bad_request(err),
            PasswordError::Mismatch => {
                AppError::unauthorized("Invalid login or password".to_string())
            }
            PasswordError::Hash(_) => AppError::internal(err),
        }
    }
}
