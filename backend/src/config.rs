//! Runtime configuration read from the environment.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;

// Defaults used when the corresponding variable is unset
const DATABASE_URL: &str = "sqlite:nzwalks.db";
const BIND_ADDR: &str = "127.0.0.1:3000";
const CORS_ORIGIN: &str = "http://localhost:8080";

pub const DATABASE_URL_VAR: &str = "NZWALKS_DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "NZWALKS_BIND_ADDR";
pub const CORS_ORIGIN_VAR: &str = "NZWALKS_CORS_ORIGIN";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Origin allowed to call the API from a browser
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup(DATABASE_URL_VAR).unwrap_or_else(|| DATABASE_URL.to_string());

        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid {}: {}", BIND_ADDR_VAR, bind_addr))?;

        let cors_origin = lookup(CORS_ORIGIN_VAR).unwrap_or_else(|| CORS_ORIGIN.to_string());
        let cors_origin = cors_origin
            .parse::<HeaderValue>()
            .with_context(|| format!("Invalid {}: {}", CORS_ORIGIN_VAR, cors_origin))?;

        Ok(Self {
            database_url,
            bind_addr,
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_url, "sqlite:nzwalks.db");
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origin, "http://localhost:8080");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DATABASE_URL_VAR, "sqlite::memory:"),
            (BIND_ADDR_VAR, "0.0.0.0:8000"),
            (CORS_ORIGIN_VAR, "https://walks.example.nz"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.cors_origin, "https://walks.example.nz");
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = AppConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));
    }
}
