//! # CraftPlace Core
//!
//! Foundational types shared by every CraftPlace crate:
//!
//! - [`errors`]: [`AppError`], the HTTP-facing error with response conversion
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use craftplace_core::{AppError, hash_password, check_password};
//!
//! let hash = hash_password("secure_password")?;
//! check_password("secure_password", &hash)?;
//!
//! let error = AppError::not_found(anyhow::anyhow!("User not found"));
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{PasswordError, check_password, hash_password};
