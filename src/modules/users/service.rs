use anyhow::anyhow;
use tracing::{info, instrument};
use uuid::Uuid;

use craftplace_auth::AuthenticatedIdentity;
use craftplace_core::{AppError, hash_password};

use super::model::{UpdateLoginDto, UpdatePasswordDto, UserResponse};
use super::repository::UserRepository;

pub struct UserService;

impl UserService {
    #[instrument(skip(users))]
    pub async fn get_user_by_id(
        users: &UserRepository,
        user_id: Uuid,
    ) -> Result<UserResponse, AppError> {
        users
            .get_by_id(user_id)
            .await
            .map(|user| user.to_response())
            .ok_or_else(|| AppError::not_found(anyhow!("user not found")))
    }

    /// Changes the login of the user bound to `identity`.
    #[instrument(skip(users, identity))]
    pub async fn change_login(
        users: &UserRepository,
        identity: &AuthenticatedIdentity,
        dto: UpdateLoginDto,
    ) -> Result<(), AppError> {
        let user_id = identity.user_id()?;
        users.update_login(user_id, &dto.login).await?;
        info!(user_id = %user_id, "Login changed");
        Ok(())
    }

    /// Replaces the password of the user bound to `identity`.
    #[instrument(skip(users, identity))]
    pub async fn change_password(
        users: &UserRepository,
        identity: &AuthenticatedIdentity,
        dto: UpdatePasswordDto,
    ) -> Result<(), AppError> {
        let user_id = identity.user_id()?;
        let hashed_password = hash_password(&dto.password)?;
        users.update_password(user_id, hashed_password).await?;
        info!(user_id = %user_id, "Password changed");
        Ok(())
    }
}
