// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! The storage location comes from `DATABASE_URI`. Any `<password>`
//! placeholder in it is replaced with `DATABASE_PASSWORD` at startup so the
//! credential can be injected separately from the URI.

use std::env;

/// Placeholder substituted with `DATABASE_PASSWORD`.
pub const PASSWORD_PLACEHOLDER: &str = "<password>";

const DEFAULT_DATABASE_URI: &str = "memory://";
const DEFAULT_PORT: u16 = 3000;

/// Where records are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Process-local store, lost on restart
    Memory,
    /// Cloud Firestore in the given GCP project
    Firestore { project_id: String },
}

impl StoreLocation {
    /// Parse a storage URI: `memory://` or `firestore://<project-id>`.
    pub fn parse(uri: &str) -> Result<Self, ConfigError> {
        let uri = uri.trim();
        if uri == "memory" || uri == "memory://" {
            return Ok(StoreLocation::Memory);
        }

        match uri.strip_prefix("firestore://") {
            Some(project) => {
                let project_id = project.trim_end_matches('/');
                if project_id.is_empty() || project_id.contains('/') {
                    return Err(ConfigError::UnsupportedUri(uri.to_string()));
                }
                Ok(StoreLocation::Firestore {
                    project_id: project_id.to_string(),
                })
            }
            None => Err(ConfigError::UnsupportedUri(uri.to_string())),
        }
    }

    /// Short backend name for logs.
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreLocation::Memory => "memory",
            StoreLocation::Firestore { .. } => "firestore",
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved storage location
    pub store: StoreLocation,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            store: StoreLocation::Memory,
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw_uri = env::var("DATABASE_URI").unwrap_or_else(|_| DEFAULT_DATABASE_URI.to_string());
        let password = env::var("DATABASE_PASSWORD").ok();
        let uri = resolve_database_uri(&raw_uri, password.as_deref())?;

        Ok(Self {
            store: StoreLocation::parse(&uri)?,
            port: parse_port(env::var("PORT").ok().as_deref()),
        })
    }
}

/// Substitute the password placeholder in a storage URI.
pub fn resolve_database_uri(raw: &str, password: Option<&str>) -> Result<String, ConfigError> {
    if !raw.contains(PASSWORD_PLACEHOLDER) {
        return Ok(raw.to_string());
    }

    let password = password
        .map(str::trim)
        .ok_or(ConfigError::Missing("DATABASE_PASSWORD"))?;
    Ok(raw.replace(PASSWORD_PLACEHOLDER, password))
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Unsupported database URI: {0}")]
    UnsupportedUri(String),
}
