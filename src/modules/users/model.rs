//! User entity and self-service DTOs.
//!
//! - [`User`] - stored user, including the password hash
//! - [`UserResponse`] - public view of a user
//! - [`UpdateLoginDto`] / [`UpdatePasswordDto`] - self-service updates for the caller

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use craftplace_core::AppError;

pub const MAX_USERNAME_LEN: usize = 50;
pub const MIN_LOGIN_LEN: usize = 4;
pub const MAX_LOGIN_LEN: usize = 50;
pub const MIN_PASSWORD_LEN: usize = 4;

/// A registered user. Logins are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    username: String,
    login: String,
    hashed_password: String,
}

impl User {
    /// Builds a user, trimming `username` and `login`.
    ///
    /// # Errors
    ///
    /// Returns a bad request error if either name is empty or too long after
    /// trimming, or if `hashed_password` is empty.
    pub fn new(
        id: Uuid,
        username: &str,
        login: &str,
        hashed_password: String,
    ) -> Result<Self, AppError> {
        let user = Self {
            id,
            username: username.trim().to_string(),
            login: login.trim().to_string(),
            hashed_password,
        };
        user.validate()?;
        Ok(user)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.username.is_empty() || self.username.len() > MAX_USERNAME_LEN {
            return Err(AppError::bad_request(anyhow!("invalid username")));
        }
        if self.login.is_empty() || self.login.len() > MAX_LOGIN_LEN {
            return Err(AppError::bad_request(anyhow!("invalid login")));
        }
        if self.hashed_password.is_empty() {
            return Err(AppError::bad_request(anyhow!("invalid password hash")));
        }
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn hashed_password(&self) -> &str {
        &self.hashed_password
    }

    pub fn set_login(&mut self, login: &str) -> Result<(), AppError> {
        let previous = std::mem::replace(&mut self.login, login.trim().to_string());
        if let Err(e) = self.validate() {
            self.login = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn set_hashed_password(&mut self, hashed_password: String) {
        self.hashed_password = hashed_password;
    }

    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            login: self.login.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "ulogin")]
    pub login: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateLoginDto {
    #[validate(length(
        min = (MIN_LOGIN_LEN as u64),
        max = (MAX_LOGIN_LEN as u64),
        message = "login must be 4 to 50 characters"
    ))]
    #[schema(example = "ulogin")]
    pub login: String,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordDto {
    #[validate(length(min = (MIN_PASSWORD_LEN as u64), message = "password must be at least 4 characters"))]
    #[schema(example = "12345678")]
    pub password: String,
}

impl std::fmt::Debug for UpdatePasswordDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdatePasswordDto").finish_non_exhaustive()
    }
}
