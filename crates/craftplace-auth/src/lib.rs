//! # CraftPlace Auth
//!
//! Token lifecycle and request identity for the CraftPlace API.
//!
//! - [`payload`]: [`Payload`] claims and the [`Role`] tag
//! - [`jwt`]: the [`TokenMaker`] seam and its HS256 implementation, [`JwtTokenMaker`]
//! - [`identity`]: [`AuthenticatedIdentity`], the per-request binding of a verified payload
//! - [`error`]: [`AuthError`] and its mapping onto HTTP errors
//!
//! # Flow
//!
//! 1. Login issues a token with [`TokenMaker::create_token`]
//! 2. The authentication middleware verifies it with [`TokenMaker::verify_token`]
//! 3. The verified payload is bound with [`AuthenticatedIdentity::authorize`]
//! 4. Handlers ask [`AuthenticatedIdentity::user_id`] who the caller is
//!
//! # Example
//!
//! ```ignore
//! use chrono::Duration;
//! use craftplace_auth::{AuthenticatedIdentity, JwtTokenMaker, Role, TokenMaker};
//!
//! let maker = JwtTokenMaker::new("12345678901234567890123456789012")?;
//! let token = maker.create_token(user_id, Role::User, Duration::hours(1))?;
//!
//! let payload = maker.verify_token(&token, &Role::User)?;
//! let identity = AuthenticatedIdentity::default().authorize(payload);
//! assert_eq!(identity.user_id()?, user_id);
//! ```

pub mod error;
pub mod identity;
pub mod jwt;
pub mod payload;

// Re-export commonly used types at crate root
pub use error::AuthError;
pub use identity::AuthenticatedIdentity;
pub use jwt::{JwtTokenMaker, MIN_SECRET_KEY_SIZE, TokenMaker};
pub use payload::{Payload, Role};
