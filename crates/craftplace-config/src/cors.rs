//! Browser origins allowed to call the API.

use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Reads the comma-separated `ALLOWED_ORIGINS`, falling back to the local
    /// frontend dev servers.
    pub fn from_env() -> Self {
        let raw = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| {
            tracing::debug!("ALLOWED_ORIGINS not set, allowing local dev origins");
            DEFAULT_ORIGINS.to_string()
        });

        Self {
            allowed_origins: parse_origins(&raw),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
