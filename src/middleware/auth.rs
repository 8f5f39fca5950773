use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, warn};
use uuid::Uuid;

use craftplace_auth::AuthenticatedIdentity;
use craftplace_core::AppError;

use crate::modules::auth::service::AuthService;
use crate::state::AppState;

/// Extractor for the caller's identity as bound by [`require_auth`].
///
/// Never rejects: on routes without the middleware the identity is
/// unauthenticated and [`AuthUser::user_id`] fails closed.
#[derive(Debug, Clone, Default)]
pub struct AuthUser(pub AuthenticatedIdentity);

impl AuthUser {
    /// Get the caller's user ID
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Ok(self.0.user_id()?)
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<AuthenticatedIdentity>()
            .cloned()
            .unwrap_or_default();

        Ok(AuthUser(identity))
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format".to_string()))
}

/// Verifies the bearer token and binds the caller's identity to the request.
///
/// Rejects with 401 when the header is missing or the token does not verify.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let payload = {
        let token = bearer_token(req.headers())?;
        AuthService::verify_by_token(state.token_maker.as_ref(), token).map_err(|e| {
            if e.is_rejection() {
                warn!(error = %e, "Authentication failed");
            } else {
                error!(error = %e, "Token verification fault");
            }
            AppError::from(e)
        })?
    };

    debug!(person_id = %payload.person_id(), "Request authenticated");
    let identity = AuthenticatedIdentity::default().authorize(payload);
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
