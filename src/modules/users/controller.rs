use axum::Json;
use axum::extract::State;
use tracing::instrument;
use uuid::Uuid;

use craftplace_core::AppError;

use super::model::{UpdateLoginDto, UpdatePasswordDto, UserResponse};
use super::service::UserService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/v1/user/{id_user}",
    params(
        ("id_user" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Malformed user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    ValidatedPath(id_user): ValidatedPath<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserService::get_user_by_id(&state.users, id_user).await?;
    Ok(Json(user))
}

/// Change the caller's login
#[utoipa::path(
    patch,
    path = "/api/v1/user/update-login",
    request_body = UpdateLoginDto,
    responses(
        (status = 200, description = "Login updated", body = MessageResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Login already taken", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn update_login(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateLoginDto>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::change_login(&state.users, &auth_user.0, dto).await?;
    Ok(Json(MessageResponse {
        message: "Login updated".to_string(),
    }))
}

/// Change the caller's password
#[utoipa::path(
    patch,
    path = "/api/v1/user/update-password",
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn update_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdatePasswordDto>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::change_password(&state.users, &auth_user.0, dto).await?;
    Ok(Json(MessageResponse {
        message: "Password updated".to_string(),
    }))
}
