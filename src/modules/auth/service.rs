use std::sync::LazyLock;

use anyhow::anyhow;
use chrono::Duration;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use craftplace_auth::{AuthError, Payload, Role, TokenMaker};
use craftplace_config::JwtConfig;
use craftplace_core::{AppError, check_password, hash_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequestDto};
use crate::modules::users::model::User;
use crate::modules::users::repository::UserRepository;

// Unknown logins are checked against this so both failure paths cost one bcrypt verify.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("craftplace-dummy-password").ok());

pub struct AuthService;

impl AuthService {
    #[instrument(skip(users))]
    pub async fn register_user(
        users: &UserRepository,
        dto: RegisterRequestDto,
    ) -> Result<Uuid, AppError> {
        if users.get_by_login(&dto.login).await.is_some() {
            return Err(AppError::conflict(anyhow!("login is already taken")));
        }

        let hashed_password = hash_password(&dto.password)?;
        let user = User::new(Uuid::new_v4(), &dto.username, &dto.login, hashed_password)?;
        let user_id = user.id();

        users.add(user).await?;

        info!(user_id = %user_id, "User registered");
        Ok(user_id)
    }

    #[instrument(skip(users, token_maker, jwt_config))]
    pub async fn login_user(
        users: &UserRepository,
        token_maker: &dyn TokenMaker,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let Some(user) = users.get_by_login(&dto.login).await else {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = check_password(&dto.password, dummy);
            }
            return Err(AppError::unauthorized(
                "Invalid login or password".to_string(),
            ));
        };

        check_password(&dto.password, user.hashed_password()).inspect_err(|_| {
            warn!(user_id = %user.id(), "Login failed");
        })?;

        let duration = Duration::try_seconds(jwt_config.access_token_expiry).ok_or_else(|| {
            AppError::internal_error("Access token expiry is out of range".to_string())
        })?;

        let access_token = token_maker.create_token(user.id(), Role::User, duration)?;

        info!(user_id = %user.id(), "User logged in");
        Ok(LoginResponse { access_token })
    }

    /// Verifies a bearer token issued to a regular user.
    pub fn verify_by_token(token_maker: &dyn TokenMaker, token: &str) -> Result<Payload, AuthError> {
        token_maker.verify_token(token, &Role::User)
    }
}
