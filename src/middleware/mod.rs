//! Request middleware and extractors.
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::require_auth`] verifies the token and binds the caller's
//!    [`AuthenticatedIdentity`](craftplace_auth::AuthenticatedIdentity) to the request
//! 3. Handlers take an [`auth::AuthUser`] and ask it for the caller's id
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn handler(auth_user: AuthUser) -> Result<impl IntoResponse, AppError> {
//!     let user_id = auth_user.user_id()?;
//!     // ...
//! }
//! ```

pub mod auth;
