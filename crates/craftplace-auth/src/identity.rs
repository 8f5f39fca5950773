//! Per-request caller identity.
//!
//! An [`AuthenticatedIdentity`] starts out [`Unauthenticated`] and becomes
//! [`Authenticated`] once the authentication middleware binds a verified
//! [`Payload`] to it. Binding never mutates an existing value; it returns a new
//! one, so identities are never shared between requests.
//!
//! [`Unauthenticated`]: AuthenticatedIdentity::Unauthenticated
//! [`Authenticated`]: AuthenticatedIdentity::Authenticated

use tracing::warn;
use uuid::Uuid;

use crate::error::AuthError;
use crate::payload::{Payload, Role};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthenticatedIdentity {
    #[default]
    Unauthenticated,
    Authenticated(Payload),
}

impl AuthenticatedIdentity {
    /// Returns an identity bound to `payload`.
    pub fn authorize(&self, payload: Payload) -> Self {
        if let AuthenticatedIdentity::Authenticated(existing) = self {
            warn!(
                person_id = %existing.person_id(),
                "Identity bound more than once for a single request"
            );
        }
        AuthenticatedIdentity::Authenticated(payload)
    }

    /// The acting user's id.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NotAuthorized`] if no payload is bound
    /// - [`AuthError::NoRights`] if the bound role is not [`Role::User`]
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        match self {
            AuthenticatedIdentity::Unauthenticated => Err(AuthError::NotAuthorized),
            AuthenticatedIdentity::Authenticated(payload) if payload.role() != &Role::User => {
                Err(AuthError::NoRights)
            }
            AuthenticatedIdentity::Authenticated(payload) => Ok(payload.person_id()),
        }
    }
}
