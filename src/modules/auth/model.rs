use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::users::model::{
    MAX_LOGIN_LEN, MAX_USERNAME_LEN, MIN_LOGIN_LEN, MIN_PASSWORD_LEN,
};

// Registration request structure
#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(length(
        min = 1,
        max = (MAX_USERNAME_LEN as u64),
        message = "username must be 1 to 50 characters"
    ))]
    #[schema(example = "uname")]
    pub username: String,
    #[validate(length(
        min = (MIN_LOGIN_LEN as u64),
        max = (MAX_LOGIN_LEN as u64),
        message = "login must be 4 to 50 characters"
    ))]
    #[schema(example = "ulogin")]
    pub login: String,
    #[validate(length(min = (MIN_PASSWORD_LEN as u64), message = "password must be at least 4 characters"))]
    #[schema(example = "12345678")]
    pub password: String,
}

// Login request structure
#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(
        min = (MIN_LOGIN_LEN as u64),
        max = (MAX_LOGIN_LEN as u64),
        message = "login must be 4 to 50 characters"
    ))]
    #[schema(example = "ulogin")]
    pub login: String,
    #[validate(length(min = (MIN_PASSWORD_LEN as u64), message = "password must be at least 4 characters"))]
    #[schema(example = "12345678")]
    pub password: String,
}

// Passwords never reach the logs.
impl std::fmt::Debug for RegisterRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequestDto")
            .field("username", &self.username)
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub id: Uuid,
}

// Login response
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
