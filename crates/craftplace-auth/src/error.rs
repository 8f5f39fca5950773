use craftplace_core::AppError;
use thiserror::Error;

/// Failures of the token lifecycle and of identity lookups.
///
/// Configuration and signing failures are server-side faults. Every other
/// variant is a rejection of the caller and maps to 401 or 403.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid key size: must be at least {min} bytes, got {actual}")]
    InvalidKeySize { actual: usize, min: usize },

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token subject must not be the nil UUID")]
    NilSubject,

    #[error("token duration is out of range")]
    InvalidDuration,

    #[error("token is invalid")]
    InvalidToken,

    #[error("token has expired")]
    ExpiredToken,

    #[error("token role is incorrect")]
    IncorrectRole,

    #[error("not authorized")]
    NotAuthorized,

    #[error("has no rights")]
    NoRights,
}

impl AuthError {
    /// True for errors the caller caused, as opposed to misconfiguration.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken
                | AuthError::ExpiredToken
                | AuthError::IncorrectRole
                | AuthError::NotAuthorized
                | AuthError::NoRights
        )
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken
            | AuthError::ExpiredToken
            | AuthError::IncorrectRole
            | AuthError::NotAuthorized => AppError::unauthorized(err.to_string()),
            AuthError::NoRights => AppError::forbidden(err.to_string()),
            AuthError::InvalidKeySize { .. }
            | AuthError::Signing(_)
            | AuthError::NilSubject
            | AuthError::InvalidDuration => AppError::internal(err),
        }
    }
}
