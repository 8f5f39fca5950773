//! # CraftPlace API
//!
//! Backend for a marketplace of handicraft makers, built with Rust and Axum.
//! This crate wires the account endpoints on top of the token service and
//! authorization binder provided by [`craftplace_auth`].
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Bearer-token middleware and the AuthUser extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Registration and login
//! │   └── users/       # User lookup, login and password changes
//! ├── docs.rs          # OpenAPI document
//! ├── logging.rs       # Tracing setup and request logging
//! ├── router.rs        # Main application router
//! └── state.rs         # Shared application state
//! ```
//!
//! Each feature module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic
//! - `model.rs`: Domain types and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! `POST /api/v1/auth-user/login` returns an HS256 access token whose claims
//! carry the user id, the role and the issue/expiry instants. Protected routes
//! expect `Authorization: Bearer <token>`; the token is checked for signature,
//! then expiry, then role, and the resulting identity is bound to the request.
//!
//! ### Environment Variables
//!
//! ```bash
//! JWT_SECRET=at-least-32-bytes-of-secret-material
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:3000
//! HOST=0.0.0.0
//! PORT=8080
//! LOG_LEVEL=info
//! LOG_DIR=storage/logs
//! ```
//!
//! Swagger UI is served at `/swagger-ui`.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use craftplace_auth;
pub use craftplace_config;
pub use craftplace_core;
