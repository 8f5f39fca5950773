//! Feature modules.
//!
//! Each module is split into `model`, `service`, `controller` and `router`.
//!
//! - [`auth`]: registration and login
//! - [`users`]: user lookup and caller self-service

pub mod auth;
pub mod users;
